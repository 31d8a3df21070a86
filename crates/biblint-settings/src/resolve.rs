use crate::ConfigError;
use crate::model::BiblintConfigV1;
use crate::selection::{DEFAULT_SELECTION, parse_selection};
use biblint_domain::policy::EffectiveConfig;

/// Command-line values; any `Some`/`true` wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub checks: Option<String>,
    pub no_suppressions: bool,
    pub only_cited: bool,
    pub max_complaints: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    /// The selection expression that produced `effective.selected`.
    pub selection: String,
}

pub fn resolve_config(
    cfg: BiblintConfigV1,
    overrides: Overrides,
) -> Result<ResolvedConfig, ConfigError> {
    let mut effective = EffectiveConfig::default();

    let selection = overrides
        .checks
        .or(cfg.checks)
        .unwrap_or_else(|| DEFAULT_SELECTION.to_string());
    effective.selected = parse_selection(&selection)?;

    if overrides.no_suppressions {
        effective.honor_suppressions = false;
    } else if let Some(honor) = cfg.suppressions {
        effective.honor_suppressions = honor;
    }

    effective.only_cited = overrides.only_cited || cfg.only_cited.unwrap_or(false);

    if let Some(max) = overrides.max_complaints.or(cfg.max_complaints) {
        if max == 0 {
            return Err(ConfigError::Invalid(
                "max_complaints must be at least 1".to_string(),
            ));
        }
        effective.max_complaints = max as usize;
    }

    Ok(ResolvedConfig {
        effective,
        selection,
    })
}
