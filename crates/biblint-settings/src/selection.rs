//! Check selection expressions.
//!
//! An expression is a colon-separated list of tokens evaluated left to right against a
//! running set that starts empty: `+name` or `name` adds, `-name` removes. Group tokens
//! (`ALL`, `DEFAULT`, `BIB`, `TEX`) expand to several checks. Matching ignores case.

use biblint_types::{CATALOG, Domain};
use std::collections::BTreeSet;

pub const DEFAULT_SELECTION: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error(
        "unknown check '{name}' in selection '{expression}'; run `biblint list-checks` to see available checks"
    )]
    UnknownCheck { name: String, expression: String },
    #[error("selection '{expression}' has an operator without a check name")]
    MissingName { expression: String },
}

fn expand(name: &str) -> Option<Vec<&'static str>> {
    let lower = name.to_ascii_lowercase();
    let group: Vec<&'static str> = match lower.as_str() {
        "all" => CATALOG.iter().map(|d| d.name).collect(),
        "default" => CATALOG
            .iter()
            .filter(|d| d.default_enabled)
            .map(|d| d.name)
            .collect(),
        "bib" => CATALOG
            .iter()
            .filter(|d| d.domain == Domain::Bib)
            .map(|d| d.name)
            .collect(),
        "tex" => CATALOG
            .iter()
            .filter(|d| d.domain == Domain::Tex)
            .map(|d| d.name)
            .collect(),
        other => vec![biblint_types::lookup_check(other)?.name],
    };
    Some(group)
}

/// Evaluate a selection expression into the set of selected check names.
pub fn parse_selection(expression: &str) -> Result<BTreeSet<String>, SelectionError> {
    let mut selected = BTreeSet::new();
    for token in expression.split(':').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        let (add, name) = if let Some(rest) = token.strip_prefix('+') {
            (true, rest.trim())
        } else if let Some(rest) = token.strip_prefix('-') {
            (false, rest.trim())
        } else {
            (true, token)
        };
        if name.is_empty() {
            return Err(SelectionError::MissingName {
                expression: expression.to_string(),
            });
        }
        let checks = expand(name).ok_or_else(|| SelectionError::UnknownCheck {
            name: name.to_string(),
            expression: expression.to_string(),
        })?;
        for check in checks {
            if add {
                selected.insert(check.to_string());
            } else {
                selected.remove(check);
            }
        }
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblint_types::ids;

    #[test]
    fn all_minus_one() {
        let selected = parse_selection("ALL:-misformatted-month").unwrap();
        assert_eq!(selected.len(), CATALOG.len() - 1);
        assert!(!selected.contains(ids::CHECK_MISFORMATTED_MONTH));
    }

    #[test]
    fn starts_empty_and_evaluates_left_to_right() {
        assert!(parse_selection("").unwrap().is_empty());
        assert!(parse_selection("::").unwrap().is_empty());

        let selected = parse_selection("-check-isbn:check-isbn").unwrap();
        assert_eq!(
            selected.into_iter().collect::<Vec<_>>(),
            vec![ids::CHECK_ISBN.to_string()]
        );
        assert!(parse_selection("check-isbn:-check-isbn").unwrap().is_empty());
    }

    #[test]
    fn groups_and_case() {
        let default = parse_selection("default").unwrap();
        assert!(default.contains(ids::CHECK_ISBN));
        assert!(!default.contains(ids::CHECK_FULL_FIRST_NAMES));
        assert!(!default.contains(ids::CHECK_REPEATED_WORDS));

        let tex = parse_selection("TEX").unwrap();
        assert_eq!(tex.len(), 3);
        assert!(tex.contains(ids::CHECK_REPEATED_WORDS));

        let bib_only = parse_selection("ALL:-tex").unwrap();
        assert!(!bib_only.contains(ids::CHECK_SEPARATED_WORDS));
        assert!(bib_only.contains(ids::CHECK_LOCAL_COPIES));

        assert!(
            parse_selection("+Check-ISBN")
                .unwrap()
                .contains(ids::CHECK_ISBN)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = parse_selection("ALL:-no-such-check").unwrap_err();
        assert_eq!(
            err,
            SelectionError::UnknownCheck {
                name: "no-such-check".to_string(),
                expression: "ALL:-no-such-check".to_string(),
            }
        );
        assert!(err.to_string().contains("biblint list-checks"));

        // Tool-level complaints are not selectable.
        assert!(parse_selection(ids::CHECK_PARSE_ERROR).is_err());
        assert!(matches!(
            parse_selection("DEFAULT:-"),
            Err(SelectionError::MissingName { .. })
        ));
    }
}
