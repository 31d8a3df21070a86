use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::isbn::{self, IsbnKind};
use crate::model::Entry;
use biblint_types::{Complaint, ids};

pub fn run(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(value) = entry.text("isbn") else {
        return Ok(());
    };
    let problems = isbn::validate(&value);
    for problem in &problems {
        out.push(entry_complaint(
            ids::CHECK_ISBN,
            entry,
            Some("isbn"),
            format!("{problem} (isbn = {value})"),
        ));
    }

    if problems.is_empty() && isbn::kind_of(&value) == Some(IsbnKind::Isbn10) {
        let isbn13 = isbn::to_isbn13(&value)?;
        out.push(entry_complaint(
            ids::CHECK_ISBN,
            entry,
            Some("isbn"),
            format!("ISBN-10 {value} should be given as ISBN-13: {isbn13}"),
        ));
    }
    Ok(())
}
