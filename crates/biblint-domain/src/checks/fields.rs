use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::model::Entry;
use biblint_types::{Complaint, ids};

const ALWAYS: &[&str] = &["title", "author", "year"];

/// Fields required on top of [`ALWAYS`], or `None` for unknown entry types.
fn required_fields(entry_type: &str) -> Option<&'static [&'static str]> {
    let fields: &'static [&'static str] = match entry_type {
        "inproceedings" | "incollection" => &["booktitle", "publisher", "doi"],
        "techreport" => &["number", "institution"],
        "book" => &["publisher", "isbn"],
        "article" => &["journal", "pages"],
        "manual" | "misc" | "phdthesis" => &[],
        _ => return None,
    };
    Some(fields)
}

pub fn run(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(specific) = required_fields(entry.entry_type()) else {
        out.push(entry_complaint(
            ids::CHECK_PRESENT_FIELDS,
            entry,
            None,
            format!("Unknown entry type \"{}\"", entry.entry_type()),
        ));
        return Ok(());
    };

    let missing: Vec<&str> = ALWAYS
        .iter()
        .chain(specific)
        .copied()
        .filter(|f| !entry.has_field(f))
        .collect();
    if !missing.is_empty() {
        out.push(entry_complaint(
            ids::CHECK_PRESENT_FIELDS,
            entry,
            None,
            format!(
                "Missing field(s) for @{}: {}",
                entry.entry_type(),
                missing.join(", ")
            ),
        ));
    }
    Ok(())
}
