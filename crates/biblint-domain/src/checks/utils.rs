use crate::model::Entry;
use biblint_types::Complaint;
use url::form_urlencoded;

/// A complaint about `entry`, located at `field` when given (else at the header).
pub fn entry_complaint(
    check: &str,
    entry: &Entry,
    field: Option<&str>,
    message: impl Into<String>,
) -> Complaint {
    let location = match field {
        Some(field) => entry.location_of(field),
        None => entry.location(),
    };
    Complaint::new(check, location, message).with_key(entry.key())
}

/// `application/x-www-form-urlencoded` encoding for search links.
pub fn url_encode(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Up to five title words longer than three characters, as search terms.
pub fn title_search_terms(entry: &Entry) -> String {
    let title = entry.text("title").unwrap_or_default().replace(':', "");
    title
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .take(5)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn quote_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
