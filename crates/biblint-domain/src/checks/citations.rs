use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use biblint_types::{Complaint, ids};
use std::collections::BTreeSet;

pub fn uncited(ctx: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(citations) = ctx.citations else {
        return Ok(());
    };
    let mut reported = BTreeSet::new();
    for entry in ctx.entries() {
        if citations.contains(entry.key()) || !reported.insert(entry.key()) {
            continue;
        }
        let copies: Vec<_> = ctx
            .bibliography
            .all_with_key(entry.key())
            .skip(1)
            .map(|e| e.location())
            .collect();
        out.push(
            entry_complaint(
                ids::CHECK_UNCITED_CITATIONS,
                entry,
                None,
                format!("Entry \"{}\" is never cited", entry.key()),
            )
            .with_related(copies),
        );
    }
    Ok(())
}

pub fn undefined(ctx: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(citations) = ctx.citations else {
        return Ok(());
    };
    for (key, locations) in citations.iter() {
        if ctx.bibliography.contains_key(key) {
            continue;
        }
        for location in locations {
            out.push(
                Complaint::new(
                    ids::CHECK_UNDEFINED_CITATIONS,
                    location.clone(),
                    format!("Citation \"{key}\" is not defined in any bibliography"),
                )
                .with_key(key),
            );
        }
    }
    Ok(())
}
