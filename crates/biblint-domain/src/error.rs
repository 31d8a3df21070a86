use crate::isbn::ConversionError;

/// Failure of one check on one unit. The engine turns it into an
/// `internal-check-error` complaint and moves on.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{0} is not available for this run")]
    MissingInput(&'static str),
    #[error("local copy lookup for '{key}' failed: {reason}")]
    LocalCopy { key: String, reason: String },
    #[error("ISBN conversion failed: {0}")]
    Isbn(#[from] ConversionError),
}
