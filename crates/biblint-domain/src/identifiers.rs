//! DOI/URN to resolver URL canonicalization.

use regex::Regex;
use std::sync::LazyLock;

pub const DOI_RESOLVER: &str = "https://dx.doi.org/";
pub const URN_RESOLVER: &str = "https://nbn-resolving.org/";

static RFC_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^rfc(\d+)$").expect("rfc key regex"));

/// RFC number encoded in a citation key like `rfc7669` (case-insensitive, whole key).
pub fn rfc_number(key: &str) -> Option<u32> {
    RFC_KEY
        .captures(key)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn rfc_url(number: u32) -> String {
    format!("https://tools.ietf.org/rfc/rfc{number}.txt")
}

/// DOI assigned to RFCs since RFC 7669.
pub fn rfc_doi(number: u32) -> String {
    format!("10.17487/rfc{number}")
}

/// URLs an entry's `url` field may point to, in preference order.
///
/// An entry keyed like an RFC and carrying a DOI is expected to link the IETF text
/// instead of the DOI resolver. A URN adds the URN resolver independently.
pub fn expected_urls(doi: Option<&str>, urn: Option<&str>, key: &str) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(doi) = doi.map(str::trim).filter(|d| !d.is_empty()) {
        match rfc_number(key) {
            Some(n) => out.push(rfc_url(n)),
            None => out.push(format!("{DOI_RESOLVER}{doi}")),
        }
    }
    if let Some(urn) = urn.map(str::trim).filter(|u| !u.is_empty()) {
        out.push(format!("{URN_RESOLVER}{urn}"));
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UrlFinding {
    /// The `url` field points somewhere else.
    Mismatch { actual: String, expected: Vec<String> },
    /// An identifier is present but there is no `url` field.
    Missing { expected: Vec<String> },
}

/// Compare an entry's `url` against the expected resolver URLs.
pub fn check_url(
    doi: Option<&str>,
    urn: Option<&str>,
    key: &str,
    url: Option<&str>,
) -> Option<UrlFinding> {
    let expected = expected_urls(doi, urn, key);
    if expected.is_empty() {
        return None;
    }
    match url.map(str::trim) {
        None => Some(UrlFinding::Missing { expected }),
        Some(actual) if expected.iter().any(|e| e == actual) => None,
        Some(actual) => Some(UrlFinding::Mismatch {
            actual: actual.to_string(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc_keys() {
        assert_eq!(rfc_number("rfc7669"), Some(7669));
        assert_eq!(rfc_number("RFC2119"), Some(2119));
        assert_eq!(rfc_number("rfc7669a"), None);
        assert_eq!(rfc_number("myrfc1"), None);
        assert_eq!(rfc_number("rfc99999999999999999999"), None);
    }

    #[test]
    fn rfc_with_doi_points_to_ietf() {
        assert_eq!(
            expected_urls(Some("10.17487/rfc7669"), None, "rfc7669"),
            vec!["https://tools.ietf.org/rfc/rfc7669.txt".to_string()]
        );
    }

    #[test]
    fn doi_points_to_resolver() {
        assert_eq!(
            expected_urls(Some("10.1109/RADECS.2011.6131431"), None, "foo11"),
            vec!["https://dx.doi.org/10.1109/RADECS.2011.6131431".to_string()]
        );
    }

    #[test]
    fn urn_is_independent() {
        assert_eq!(
            expected_urls(Some("10.1/x"), Some("urn:nbn:de:1"), "k"),
            vec![
                "https://dx.doi.org/10.1/x".to_string(),
                "https://nbn-resolving.org/urn:nbn:de:1".to_string()
            ]
        );
        assert!(expected_urls(None, None, "rfc1").is_empty());
    }

    #[test]
    fn url_findings() {
        assert_eq!(check_url(None, None, "k", Some("http://x")), None);
        assert_eq!(
            check_url(Some("10.1/x"), None, "k", None),
            Some(UrlFinding::Missing {
                expected: vec!["https://dx.doi.org/10.1/x".to_string()]
            })
        );
        assert_eq!(
            check_url(Some("10.1/x"), Some("urn:a"), "k", Some("https://nbn-resolving.org/urn:a")),
            None
        );
        assert_eq!(
            check_url(Some("10.1/x"), None, "k", Some("http://doi.org/10.1/x")),
            Some(UrlFinding::Mismatch {
                actual: "http://doi.org/10.1/x".to_string(),
                expected: vec!["https://dx.doi.org/10.1/x".to_string()]
            })
        );
    }
}
