use super::CheckContext;
use super::utils::{entry_complaint, title_search_terms, url_encode};
use crate::error::CheckError;
use crate::model::Entry;
use biblint_types::{Complaint, ids};

pub fn run(entry: &Entry, ctx: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let probe = ctx
        .local_copies
        .ok_or(CheckError::MissingInput("local copy directory"))?;
    if probe.has_local_copy(entry.key())? {
        return Ok(());
    }

    let mut message = String::from("Missing local copy");
    let terms = title_search_terms(entry);
    if !terms.is_empty() {
        message.push_str(&format!(
            ". Search: https://scholar.google.com/scholar?q={}",
            url_encode(&terms)
        ));
    }
    out.push(entry_complaint(ids::CHECK_LOCAL_COPIES, entry, None, message));
    Ok(())
}
