use super::CheckContext;
use super::utils::entry_complaint;
use crate::error::CheckError;
use crate::model::Entry;
use crate::scan::Delimiter;
use biblint_types::{Complaint, ids};

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

pub fn run(entry: &Entry, _: &CheckContext<'_>, out: &mut Vec<Complaint>) -> Result<(), CheckError> {
    let Some(value) = entry.scanned("month") else {
        return Ok(());
    };
    let complain = |out: &mut Vec<Complaint>, message: String| {
        out.push(entry_complaint(
            ids::CHECK_MISFORMATTED_MONTH,
            entry,
            Some("month"),
            message,
        ));
    };

    let [token] = value.tokens() else {
        complain(
            out,
            format!(
                "Month has unexpected multipart value \"{}\", expected one of jan..dec",
                value.plain_text()
            ),
        );
        return Ok(());
    };

    let month = token.text();
    if !MONTHS.contains(&month.as_str()) {
        complain(
            out,
            format!("Unrecognized month \"{month}\", expected one of jan..dec"),
        );
    } else if value.delimiter() != Delimiter::Bare || token.depth() > 0 {
        complain(
            out,
            format!("Month was quoted when unquoted expected: month = {month}"),
        );
    }
    Ok(())
}
