use serde::{Deserialize, Serialize};

/// `biblint.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiblintConfigV1 {
    /// Optional schema string for tooling (`biblint.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Selection expression, e.g. `DEFAULT:-misformatted-month`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checks: Option<String>,

    /// Honor `% LINT` suppression directives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suppressions: Option<bool>,

    /// Only lint entries cited by the given documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_cited: Option<bool>,

    /// How many complaints to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_complaints: Option<u32>,
}
