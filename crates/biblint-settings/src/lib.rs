//! Config parsing and check selection.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod selection;

pub use model::BiblintConfigV1;
pub use resolve::{Overrides, ResolvedConfig};
pub use selection::{DEFAULT_SELECTION, SelectionError, parse_selection};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid biblint.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("{0}")]
    Invalid(String),
}

/// Parse `biblint.toml` into a typed model.
pub fn parse_config_toml(input: &str) -> Result<BiblintConfigV1, ConfigError> {
    let cfg: BiblintConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (file values + command-line overrides).
pub fn resolve_config(
    cfg: BiblintConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, ConfigError> {
    resolve::resolve_config(cfg, overrides)
}
