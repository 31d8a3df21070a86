use crate::Complaint;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for biblint reports.
pub const SCHEMA_REPORT_V1: &str = "biblint.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Summary counts for one lint run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintSummary {
    pub bibliographies_parsed: u32,
    pub entries_parsed: u32,
    pub documents_scanned: u32,
    /// Number of citations in documents, counting repeated keys.
    pub citations_found: u32,
    pub checks_run: u32,
    /// Units skipped because of `% LINT` suppressions.
    pub units_suppressed: u32,

    pub complaints_total: u32,
    pub complaints_emitted: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// The serialized report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub summary: LintSummary,
    pub complaints: Vec<Complaint>,
}
