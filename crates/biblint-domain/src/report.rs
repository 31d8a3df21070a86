use biblint_types::{Complaint, LintSummary};

#[derive(Clone, Debug)]
pub struct DomainReport {
    /// Sorted, possibly truncated.
    pub complaints: Vec<Complaint>,
    pub summary: LintSummary,
}

impl DomainReport {
    pub fn is_clean(&self) -> bool {
        self.complaints.is_empty()
    }
}
