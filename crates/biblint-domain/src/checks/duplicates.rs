use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::model::Entry;
use biblint_types::{Complaint, ids};
use std::collections::BTreeMap;

pub fn run(ctx: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let mut by_key: BTreeMap<&str, Vec<&Entry>> = BTreeMap::new();
    for entry in ctx.entries() {
        by_key.entry(entry.key()).or_default().push(entry);
    }

    for (key, entries) in by_key {
        let [first, rest @ ..] = entries.as_slice() else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        let locations: Vec<String> = entries.iter().map(|e| e.location().to_string()).collect();
        out.push(
            entry_complaint(
                ids::CHECK_DUPLICATE_ENTRIES_BY_NAME,
                first,
                None,
                format!(
                    "Citation key \"{key}\" is defined {} times: {}",
                    entries.len(),
                    locations.join(", ")
                ),
            )
            .with_related(rest.iter().map(|e| e.location()).collect()),
        );
    }
    Ok(())
}
