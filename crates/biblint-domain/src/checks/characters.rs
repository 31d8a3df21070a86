use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::model::Entry;
use biblint_types::{Complaint, ids};

const FIELDS: [&str; 2] = ["title", "booktitle"];

fn allowed(c: char) -> bool {
    c == ' ' || c.is_ascii_graphic()
}

pub fn run(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    for field in FIELDS {
        let Some(value) = entry.field(field) else {
            continue;
        };
        let mut illegal: Vec<char> = value.chars().filter(|c| !allowed(*c)).collect();
        if illegal.is_empty() {
            continue;
        }
        illegal.sort_unstable();
        illegal.dedup();
        let listed: Vec<String> = illegal
            .iter()
            .map(|c| format!("'{}' (U+{:04X})", c.escape_debug(), u32::from(*c)))
            .collect();
        out.push(entry_complaint(
            ids::CHECK_ILLEGAL_CHARS,
            entry,
            Some(field),
            format!("Illegal characters in {field}: {}", listed.join(", ")),
        ));
    }
    Ok(())
}
