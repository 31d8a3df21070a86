//! ISBN-10/ISBN-13 validation and conversion.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
}

impl IsbnKind {
    fn canonical_groups(self) -> &'static [usize] {
        match self {
            IsbnKind::Isbn10 => &[1, 3, 5, 1],
            IsbnKind::Isbn13 => &[3, 1, 3, 5, 1],
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            IsbnKind::Isbn10 => "n-nnn-nnnnn-n",
            IsbnKind::Isbn13 => "nnn-n-nnn-nnnnn-n",
        }
    }
}

impl fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsbnKind::Isbn10 => f.write_str("ISBN-10"),
            IsbnKind::Isbn13 => f.write_str("ISBN-13"),
        }
    }
}

/// One independent validation finding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IsbnProblem {
    #[error("ISBN contains invalid character(s): {0}")]
    BadCharacter(String),
    #[error("ISBN has {0} characters, expected 10 or 13")]
    WrongLength(usize),
    #[error("{0} checksum is wrong")]
    BadChecksum(IsbnKind),
    #[error("{kind} format is wrong, expected {}", .kind.pattern())]
    BadFormat { kind: IsbnKind },
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("not an ISBN-10: {0}")]
    NotIsbn10(String),
    #[error(transparent)]
    Invalid(#[from] IsbnProblem),
}

fn is_separator(c: char) -> bool {
    c == '-' || c == ' '
}

fn compact(isbn: &str) -> Vec<char> {
    isbn.trim().chars().filter(|c| !is_separator(*c)).collect()
}

fn kind_for_len(len: usize) -> Option<IsbnKind> {
    match len {
        10 => Some(IsbnKind::Isbn10),
        13 => Some(IsbnKind::Isbn13),
        _ => None,
    }
}

/// Digit values, with a trailing `X` of an ISBN-10 read as 10.
fn digit_values(chars: &[char]) -> Option<Vec<u32>> {
    let last = chars.len().checked_sub(1)?;
    chars
        .iter()
        .enumerate()
        .map(|(idx, c)| match c {
            'X' | 'x' if idx == last && chars.len() == 10 => Some(10),
            c => c.to_digit(10),
        })
        .collect()
}

fn checksum10_ok(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .zip((1..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    sum % 11 == 0
}

fn checksum13_ok(digits: &[u32]) -> bool {
    let sum: u32 = digits
        .iter()
        .zip([1, 3].iter().cycle())
        .map(|(d, w)| d * w)
        .sum();
    sum % 10 == 0
}

/// Checksum validity, ignoring hyphenation.
pub fn checksum_valid(isbn: &str) -> bool {
    let chars = compact(isbn);
    let Some(digits) = digit_values(&chars) else {
        return false;
    };
    match kind_for_len(digits.len()) {
        Some(IsbnKind::Isbn10) => checksum10_ok(&digits),
        Some(IsbnKind::Isbn13) => checksum13_ok(&digits),
        None => false,
    }
}

/// The hyphenation matches the canonical grouping for `kind`.
pub fn format_valid(isbn: &str, kind: IsbnKind) -> bool {
    let groups: Vec<usize> = isbn
        .trim()
        .split('-')
        .map(|g| g.chars().count())
        .collect();
    groups == kind.canonical_groups()
}

/// Validate an ISBN and return every problem found.
pub fn validate(isbn: &str) -> Vec<IsbnProblem> {
    let chars = compact(isbn);
    let mut problems = Vec::new();

    let len = chars.len();
    let kind = kind_for_len(len);

    let mut bad: Vec<char> = chars
        .iter()
        .enumerate()
        .filter(|(idx, c)| {
            let trailing_x =
                matches!(c, 'X' | 'x') && *idx + 1 == len && kind == Some(IsbnKind::Isbn10);
            !c.is_ascii_digit() && !trailing_x
        })
        .map(|(_, c)| *c)
        .collect();
    bad.sort_unstable();
    bad.dedup();
    if !bad.is_empty() {
        problems.push(IsbnProblem::BadCharacter(bad.into_iter().collect()));
    }

    let Some(kind) = kind else {
        problems.push(IsbnProblem::WrongLength(len));
        return problems;
    };

    if problems.is_empty() && !checksum_valid(isbn) {
        problems.push(IsbnProblem::BadChecksum(kind));
    }
    if !format_valid(isbn, kind) {
        problems.push(IsbnProblem::BadFormat { kind });
    }
    problems
}

/// The kind of a compact-length ISBN, if the length is one of the two valid ones.
pub fn kind_of(isbn: &str) -> Option<IsbnKind> {
    kind_for_len(compact(isbn).len())
}

/// Convert a valid ISBN-10 to ISBN-13, keeping the original group boundaries.
///
/// `0-306-40615-2` becomes `978-0-306-40615-7`, `0306406152` becomes `9780306406157`.
pub fn to_isbn13(isbn: &str) -> Result<String, ConversionError> {
    let trimmed = isbn.trim();
    if kind_of(trimmed) != Some(IsbnKind::Isbn10) {
        return Err(ConversionError::NotIsbn10(trimmed.to_string()));
    }
    if let Some(problem) = validate(trimmed)
        .into_iter()
        .find(|p| !matches!(p, IsbnProblem::BadFormat { .. }))
    {
        return Err(problem.into());
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .collect();
    let normalized = normalized.trim_end_matches('-');
    // Drop the old check digit; keep whatever separator preceded it.
    let mut body: String = normalized.chars().take(normalized.chars().count() - 1).collect();
    let separated = body.ends_with('-');
    if separated {
        body.pop();
    }
    let hyphenated = normalized.contains('-');

    let mut digits: Vec<u32> = vec![9, 7, 8];
    digits.extend(body.chars().filter_map(|c| c.to_digit(10)));
    let weighted: u32 = digits
        .iter()
        .zip([1, 3].iter().cycle())
        .map(|(d, w)| d * w)
        .sum();
    let check = (10 - weighted % 10) % 10;

    let mut out = String::from("978");
    if hyphenated {
        out.push('-');
    }
    out.push_str(&body);
    if separated {
        out.push('-');
    }
    out.push_str(&check.to_string());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_checksums() {
        assert!(checksum_valid("978-3-16-148410-0"));
        assert!(!checksum_valid("978-3-16-148410-1"));
        assert!(checksum_valid("0-306-40615-2"));
        assert!(checksum_valid("0-9752298-0-X"));
        assert!(!checksum_valid("0-306-40615-3"));
    }

    #[test]
    fn canonical_format_is_independent_of_checksum() {
        // Correct checksum, non-canonical grouping.
        assert_eq!(
            validate("978-3-16-148410-0"),
            vec![IsbnProblem::BadFormat {
                kind: IsbnKind::Isbn13
            }]
        );
        assert!(validate("978-0-306-40615-7").is_empty());
        assert!(validate("0-306-40615-2").is_empty());
        assert_eq!(
            validate("0306406152"),
            vec![IsbnProblem::BadFormat {
                kind: IsbnKind::Isbn10
            }]
        );
    }

    #[test]
    fn bad_checksum_and_format_are_both_reported() {
        assert_eq!(
            validate("97803064061"),
            vec![IsbnProblem::WrongLength(11)]
        );
        assert_eq!(
            validate("978-0306-40615-8"),
            vec![
                IsbnProblem::BadChecksum(IsbnKind::Isbn13),
                IsbnProblem::BadFormat {
                    kind: IsbnKind::Isbn13
                }
            ]
        );
    }

    #[test]
    fn bad_characters_are_collected() {
        let problems = validate("0-3O6-4O615-2");
        assert_eq!(problems[0], IsbnProblem::BadCharacter("O".to_string()));
        // X is only valid as the last character of an ISBN-10.
        assert_eq!(
            validate("978-0-306-40615-X")[0],
            IsbnProblem::BadCharacter("X".to_string())
        );
    }

    #[test]
    fn converts_isbn10_preserving_groups() {
        assert_eq!(to_isbn13("0-306-40615-2").unwrap(), "978-0-306-40615-7");
        assert_eq!(to_isbn13("0306406152").unwrap(), "9780306406157");
        assert_eq!(to_isbn13("0 306 40615 2").unwrap(), "978-0-306-40615-7");
        assert!(checksum_valid(&to_isbn13("0-9752298-0-X").unwrap()));
        assert_eq!(to_isbn13("0306406152-").unwrap(), "9780306406157");
    }

    #[test]
    fn conversion_rejects_invalid_input() {
        assert!(matches!(
            to_isbn13("978-0-306-40615-7"),
            Err(ConversionError::NotIsbn10(_))
        ));
        assert!(matches!(
            to_isbn13("0-306-40615-3"),
            Err(ConversionError::Invalid(IsbnProblem::BadChecksum(
                IsbnKind::Isbn10
            )))
        ));
    }
}
