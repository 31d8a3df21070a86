use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::model::Entry;
use biblint_types::{Complaint, ids};
use std::collections::BTreeMap;

/// Title text with markup that does not change the title removed.
pub fn readable_title(entry: &Entry) -> Option<String> {
    let title = entry
        .text("title")?
        .replace("\\enquote", "")
        .replace("\\textnormal", "")
        .replace('~', " ");
    let title = title.split_whitespace().collect::<Vec<_>>().join(" ");
    (!title.is_empty()).then_some(title)
}

pub fn run(ctx: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let mut by_title: BTreeMap<String, Vec<&Entry>> = BTreeMap::new();
    for entry in ctx.entries() {
        if let Some(title) = readable_title(entry) {
            by_title.entry(title).or_default().push(entry);
        }
    }

    for (title, entries) in by_title {
        let [first, rest @ ..] = entries.as_slice() else {
            continue;
        };
        // Same key twice is the duplicate-entries check's business.
        if rest.iter().all(|e| e.key() == first.key()) {
            continue;
        }
        let others: Vec<String> = rest
            .iter()
            .map(|e| format!("{} ({})", e.key(), e.location()))
            .collect();
        out.push(
            entry_complaint(
                ids::CHECK_IDENTICAL_TITLES,
                first,
                Some("title"),
                format!(
                    "Exact title match, possible duplicate of {}: \"{title}\"",
                    others.join(", ")
                ),
            )
            .with_related(rest.iter().map(|e| e.location_of("title")).collect()),
        );
    }
    Ok(())
}
