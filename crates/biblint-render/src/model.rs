use biblint_types::{Complaint, ReportEnvelope};

/// One complaint, flattened for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableComplaint {
    pub path: String,
    pub line: u32,
    pub key: Option<String>,
    pub check: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub complaints_emitted: u32,
    pub complaints_total: u32,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub complaints: Vec<RenderableComplaint>,
    pub data: RenderableData,
}

impl From<&Complaint> for RenderableComplaint {
    fn from(c: &Complaint) -> Self {
        Self {
            path: c.path().as_str().to_string(),
            line: c.line(),
            key: c.key().map(str::to_string),
            check: c.check().to_string(),
            message: c.message().to_string(),
        }
    }
}

impl From<&ReportEnvelope> for RenderableReport {
    fn from(report: &ReportEnvelope) -> Self {
        Self {
            complaints: report.complaints.iter().map(Into::into).collect(),
            data: RenderableData {
                complaints_emitted: report.summary.complaints_emitted,
                complaints_total: report.summary.complaints_total,
                truncated_reason: report.summary.truncated_reason.clone(),
            },
        }
    }
}

/// Messages are single-line in every text format.
pub(crate) fn one_line(message: &str) -> String {
    message.replace(['\r', '\n'], " ")
}
