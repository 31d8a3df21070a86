use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Canonical source file path used in complaints and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - empty input becomes `-` (text supplied without a file, e.g. stdin)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourcePath(String);

impl Default for SourcePath {
    fn default() -> Self {
        SourcePath::new("-")
    }
}

impl SourcePath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = "-".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final path component, used by compact renderers.
    pub fn file_name(&self) -> &str {
        Utf8Path::new(self.as_str())
            .file_name()
            .unwrap_or(self.as_str())
    }
}

impl std::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SourcePath {
    fn from(value: &Utf8Path) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SourcePath {
    fn from(value: Utf8PathBuf) -> Self {
        SourcePath::new(value.as_str())
    }
}

impl From<&str> for SourcePath {
    fn from(value: &str) -> Self {
        SourcePath::new(value)
    }
}
