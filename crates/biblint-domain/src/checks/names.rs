use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::identifiers;
use crate::model::Entry;
use biblint_types::{Complaint, ids};

const PARTICLES: [&str; 4] = ["de", "der", "von", "van"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    pub fn is_abbreviated(&self) -> bool {
        self.first.contains('.') || self.first.chars().count() == 1
    }
}

/// Split a raw name list on top-level `and`. Names wrapped in braces as a whole
/// (corporate authors) and `others` are dropped.
fn split_names(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut depth = 0u32;
    let mut current = String::new();
    for word in content.split_whitespace() {
        if depth == 0 && word == "and" {
            names.push(std::mem::take(&mut current));
            continue;
        }
        for c in word.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    names.push(current);

    names
        .into_iter()
        .filter(|n| !n.is_empty() && n != "others")
        .filter(|n| !(n.starts_with('{') && n.ends_with('}')))
        .collect()
}

fn parse_name(name: &str) -> PersonName {
    let name: String = name.chars().filter(|c| *c != '{' && *c != '}').collect();
    if let Some((last, first)) = name.split_once(',') {
        return PersonName {
            first: first.trim().to_string(),
            last: last.trim().to_string(),
        };
    }

    let words: Vec<&str> = name.split_whitespace().collect();
    let Some((&surname, given)) = words.split_last() else {
        return PersonName {
            first: String::new(),
            last: String::new(),
        };
    };
    let particle_start = given
        .iter()
        .rposition(|w| !PARTICLES.contains(w))
        .map_or(0, |i| i + 1);
    let mut last: Vec<&str> = given[particle_start..].to_vec();
    last.push(surname);
    PersonName {
        first: given[..particle_start].join(" "),
        last: last.join(" "),
    }
}

/// Person names of a raw `author`/`editor` value. Names without a first name are skipped.
pub fn parse_names(raw: &str) -> Vec<PersonName> {
    let raw = raw.trim();
    let content = raw
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .or_else(|| raw.strip_prefix('"').and_then(|r| r.strip_suffix('"')))
        .unwrap_or(raw);
    split_names(content)
        .iter()
        .map(|n| parse_name(n))
        .filter(|n| !n.first.is_empty())
        .collect()
}

pub fn consistency(
    entry: &Entry,
    _: &CheckContext<'_>,
    out: &mut Vec<Complaint>,
) -> Result<(), CheckError> {
    let Some(raw) = entry.field("author") else {
        return Ok(());
    };
    let names = parse_names(raw);
    let abbreviated = names.iter().filter(|n| n.is_abbreviated()).count();
    if abbreviated > 0 && abbreviated < names.len() {
        out.push(entry_complaint(
            ids::CHECK_NAME_CONSISTENCY,
            entry,
            Some("author"),
            format!(
                "Inconsistent abbreviation of first names: {abbreviated} of {} authors abbreviated",
                names.len()
            ),
        ));
    }
    Ok(())
}

pub fn full_first_names(
    entry: &Entry,
    _: &CheckContext<'_>,
    out: &mut Vec<Complaint>,
) -> Result<(), CheckError> {
    if identifiers::rfc_number(entry.key()).is_some() {
        return Ok(());
    }
    let Some(raw) = entry.field("author") else {
        return Ok(());
    };
    let abbreviated: Vec<String> = parse_names(raw)
        .into_iter()
        .filter(PersonName::is_abbreviated)
        .map(|n| format!("{} {}", n.first, n.last))
        .collect();
    if !abbreviated.is_empty() {
        out.push(entry_complaint(
            ids::CHECK_FULL_FIRST_NAMES,
            entry,
            Some("author"),
            format!("Abbreviated first names: {}", abbreviated.join(", ")),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(first: &str, last: &str) -> PersonName {
        PersonName {
            first: first.to_string(),
            last: last.to_string(),
        }
    }

    #[test]
    fn parses_both_name_orders() {
        assert_eq!(
            parse_names("{Bar, Foo and M. Koo}"),
            vec![name("Foo", "Bar"), name("M.", "Koo")]
        );
    }

    #[test]
    fn particles_belong_to_the_last_name() {
        assert_eq!(
            parse_names("{Ludwig van Beethoven and Jan de Vries}"),
            vec![name("Ludwig", "van Beethoven"), name("Jan", "de Vries")]
        );
    }

    #[test]
    fn corporate_authors_and_others_are_skipped() {
        assert_eq!(
            parse_names("{{IEEE Computer Society} and Foo Bar and others}"),
            vec![name("Foo", "Bar")]
        );
        // Braced "and" does not split.
        assert_eq!(parse_names("{{Smith and Sons}}"), vec![]);
    }

    #[test]
    fn abbreviation_rules() {
        assert!(name("F.", "Bar").is_abbreviated());
        assert!(name("F", "Bar").is_abbreviated());
        assert!(name("Foo F.", "Bar").is_abbreviated());
        assert!(!name("Foo", "Bar").is_abbreviated());
    }
}
