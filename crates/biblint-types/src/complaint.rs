use crate::SourcePath;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A position in a bibliography or document file. Lines are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub path: SourcePath,
    pub line: u32,
}

impl Location {
    pub fn new(path: impl Into<SourcePath>, line: u32) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.path, self.line)
    }
}

/// One diagnostic finding.
///
/// Complaints are immutable once built. Their ordering is total:
/// `(path, line)` first, then check name, then message. The citation key and
/// related locations only break remaining ties, so sorting a list of complaints
/// gives the same result no matter which check produced them first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Complaint {
    location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    check: String,
    message: String,
    /// Further locations the complaint refers to (e.g. every copy of a duplicate key).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    related: Vec<Location>,
}

impl Complaint {
    pub fn new(check: impl Into<String>, location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            key: None,
            check: check.into(),
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_related(mut self, related: Vec<Location>) -> Self {
        self.related = related;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn path(&self) -> &SourcePath {
        &self.location.path
    }

    pub fn line(&self) -> u32 {
        self.location.line
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn check(&self) -> &str {
        &self.check
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[Location] {
        &self.related
    }
}

impl Ord for Complaint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.location
            .path
            .cmp(&other.location.path)
            .then(self.location.line.cmp(&other.location.line))
            .then_with(|| self.check.cmp(&other.check))
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.key.cmp(&other.key))
            .then_with(|| self.related.cmp(&other.related))
    }
}

impl PartialOrd for Complaint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
