use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::model::Entry;
use crate::scan;
use biblint_types::{Complaint, ids};
use regex::Regex;
use std::sync::LazyLock;

static ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Z][0-9a-z]*[A-Z]+[A-Za-z0-9]*").expect("abbreviation regex")
});

/// Proper names that lose their capitalization when typeset unprotected.
pub const PROPER_NAMES: &[&str] = &[
    "Android",
    "Atmel",
    "Bluetooth",
    "Ethernet",
    "Fibonacci",
    "Fourier",
    "Galois",
    "Intel",
    "Internet",
    "Keccak",
    "Linux",
    "Micron",
    "STMicroelectronics",
];

pub fn abbreviations(
    entry: &Entry,
    _: &CheckContext<'_>,
    out: &mut Vec<Complaint>,
) -> Result<(), CheckError> {
    let Some(title) = entry.scanned("title") else {
        return Ok(());
    };
    let unprotected = title.tokens().iter().find_map(|token| {
        let text = token.text();
        ABBREVIATION
            .find_iter(&text)
            .find(|m| token.byte_span_depth(m.start(), m.end()) == 0)
            .map(|m| m.as_str().to_string())
    });
    if let Some(abbreviation) = unprotected {
        out.push(entry_complaint(
            ids::CHECK_UNQUOTED_ABBREVIATIONS,
            entry,
            Some("title"),
            format!("Unquoted abbreviation \"{abbreviation}\" in title, write {{{abbreviation}}}"),
        ));
    }
    Ok(())
}

pub fn names(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(title) = entry.scanned("title") else {
        return Ok(());
    };
    for hit in scan::find_underquoted(&title, PROPER_NAMES) {
        out.push(entry_complaint(
            ids::CHECK_UNQUOTED_NAMES,
            entry,
            Some("title"),
            format!(
                "Unquoted name \"{}\" in title (in \"{}\"), write {{{}}}",
                hit.word, hit.token, hit.word
            ),
        ));
    }
    Ok(())
}

pub fn overquoted(
    entry: &Entry,
    _: &CheckContext<'_>,
    out: &mut Vec<Complaint>,
) -> Result<(), CheckError> {
    let Some(title) = entry.scanned("title") else {
        return Ok(());
    };
    if title.is_overquoted() {
        out.push(entry_complaint(
            ids::CHECK_OVERQUOTED_TITLE,
            entry,
            Some("title"),
            "Title is wrapped in an extra pair of braces, which disables case handling for \
             every word; protect single words instead",
        ));
    }
    Ok(())
}
