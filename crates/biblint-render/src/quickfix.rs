use crate::RenderableReport;
use crate::model::one_line;

/// Render complaints in the `file:line:col:message` shape editors read as a quickfix list.
///
/// Complaints carry no column, so the column is always 1.
pub fn render_quickfix(report: &RenderableReport) -> Vec<String> {
    report
        .complaints
        .iter()
        .map(|c| {
            format!(
                "{}:{}:1:{} [{}]",
                c.path,
                c.line,
                one_line(&c.message),
                c.check
            )
        })
        .collect()
}
