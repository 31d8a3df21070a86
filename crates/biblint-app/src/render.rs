//! Render use case: turn a report into the bytes written to stdout.

use anyhow::Context;
use biblint_render::RenderableReport;
use biblint_types::ReportEnvelope;

/// Output format for `biblint check`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Quickfix,
    Json,
}

pub fn render_report(report: &ReportEnvelope, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(biblint_render::render_text(&RenderableReport::from(report))),
        OutputFormat::Quickfix => {
            let mut out = String::new();
            for line in biblint_render::render_quickfix(&RenderableReport::from(report)) {
                out.push_str(&line);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => biblint_render::render_json(report).context("serialize report"),
    }
}
