use crate::RenderableReport;
use crate::model::one_line;

/// Render complaints one per line as `file:line (key): message [check]`.
///
/// The key part is left out for complaints without a citation key. A truncated
/// report ends with a note saying how many complaints were held back.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for c in &report.complaints {
        match &c.key {
            Some(key) => out.push_str(&format!(
                "{}:{} ({}): {} [{}]\n",
                c.path,
                c.line,
                key,
                one_line(&c.message),
                c.check
            )),
            None => out.push_str(&format!(
                "{}:{}: {} [{}]\n",
                c.path,
                c.line,
                one_line(&c.message),
                c.check
            )),
        }
    }

    if let Some(reason) = &report.data.truncated_reason {
        out.push_str(&format!(
            "note: {} ({} of {} complaints shown)\n",
            reason, report.data.complaints_emitted, report.data.complaints_total
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn renders_keyed_and_unkeyed_complaints() {
        let report = sample_report();
        insta::assert_snapshot!(render_text(&report), @r"
        refs.bib:3 (knuth84): Month is not a three-letter abbreviation: {March} [misformatted-month]
        refs.bib:12: Closing brace outside of any entry [parse-error]
        paper.tex:7: two line message [separated-words]
        ");
    }

    #[test]
    fn empty_report_renders_nothing() {
        let mut report = sample_report();
        report.complaints.clear();
        assert_eq!(render_text(&report), "");
    }

    #[test]
    fn truncation_adds_a_note() {
        let mut report = sample_report();
        report.complaints.truncate(1);
        report.data.complaints_emitted = 1;
        report.data.truncated_reason = Some("stopped after 1 complaints".to_string());

        let out = render_text(&report);
        assert!(out.ends_with("note: stopped after 1 complaints (1 of 3 complaints shown)\n"));
        assert_eq!(out.lines().count(), 2);
    }
}
