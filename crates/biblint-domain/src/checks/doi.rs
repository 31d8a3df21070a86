use super::CheckContext;
use super::utils::{entry_complaint, quote_list, title_search_terms, url_encode};
use crate::error::CheckError;
use crate::identifiers::{self, UrlFinding};
use crate::model::Entry;
use biblint_types::{Complaint, ids};

/// Publishers with a searchable DOI registry, matched against journal, organization,
/// publisher and booktitle. `{terms}` is replaced by the encoded title words.
const PUBLISHER_SEARCH: &[(&str, &str)] = &[
    (
        "ieee",
        "http://ieeexplore.ieee.org/search/searchresult.jsp?newsearch=true&queryText={terms}",
    ),
    ("springer", "http://link.springer.com/search?query={terms}"),
    ("acm", "http://dl.acm.org/results.cfm?query={terms}&Go.x=0&Go.y=0"),
    (
        "elsevier",
        "https://www.elsevier.com/search-results?query={terms}&labels=all",
    ),
];

pub fn uniform_url(
    entry: &Entry,
    _: &CheckContext<'_>,
    out: &mut Vec<Complaint>,
) -> Result<(), CheckError> {
    let doi = entry.text("doi");
    let urn = entry.text("urn");
    let url = entry.text("url");
    let finding = identifiers::check_url(doi.as_deref(), urn.as_deref(), entry.key(), url.as_deref());

    match finding {
        None => {}
        Some(UrlFinding::Missing { expected }) => out.push(entry_complaint(
            ids::CHECK_UNIFORM_DOI_URL,
            entry,
            None,
            format!("No URL present, expected {}", quote_list(&expected)),
        )),
        Some(UrlFinding::Mismatch { actual, expected }) => out.push(entry_complaint(
            ids::CHECK_UNIFORM_DOI_URL,
            entry,
            Some("url"),
            format!(
                "URL \"{actual}\" does not point to identifier, expected {}",
                quote_list(&expected)
            ),
        )),
    }
    Ok(())
}

fn probably_has_doi(entry: &Entry) -> bool {
    ["ee", "url"].iter().any(|field| {
        entry
            .field(field)
            .is_some_and(|v| v.to_ascii_lowercase().contains("doi"))
    })
}

pub fn missing(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    if entry.has_field("doi") || entry.has_field("urn") {
        return Ok(());
    }

    let mut message = String::from("Entry has neither DOI nor URN");
    if probably_has_doi(entry) {
        message.push_str(", but a DOI appears in the ee or url field");
    }

    let organizations = ["journal", "organization", "publisher", "booktitle"]
        .iter()
        .filter_map(|f| entry.text(f))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let search = PUBLISHER_SEARCH
        .iter()
        .find(|(name, _)| organizations.contains(name));
    if let Some((_, template)) = search {
        let terms = title_search_terms(entry);
        if !terms.is_empty() {
            message.push_str(". Search: ");
            message.push_str(&template.replace("{terms}", &url_encode(&terms)));
        }
    }

    out.push(entry_complaint(ids::CHECK_MISSING_DOI, entry, None, message));
    Ok(())
}

pub fn rfc(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(number) = identifiers::rfc_number(entry.key()) else {
        return Ok(());
    };
    let expected = identifiers::rfc_doi(number);
    match entry.text("doi") {
        None => out.push(entry_complaint(
            ids::CHECK_RFC_DOIS,
            entry,
            None,
            format!("RFC entry has no DOI, expected doi = {{{expected}}}"),
        )),
        Some(doi) if !doi.eq_ignore_ascii_case(&expected) => out.push(entry_complaint(
            ids::CHECK_RFC_DOIS,
            entry,
            Some("doi"),
            format!("RFC DOI \"{doi}\" does not follow RFC 7669, expected {expected}"),
        )),
        Some(_) => {}
    }
    Ok(())
}
