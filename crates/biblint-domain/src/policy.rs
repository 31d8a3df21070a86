use std::collections::BTreeSet;

/// Everything the engine needs to know about the user's choices.
#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    /// Selected check names (catalog names).
    pub selected: BTreeSet<String>,
    pub honor_suppressions: bool,
    pub only_cited: bool,
    pub max_complaints: usize,
}

impl EffectiveConfig {
    pub fn is_selected(&self, check: &str) -> bool {
        self.selected.contains(check)
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
            honor_suppressions: true,
            only_cited: false,
            max_complaints: 500,
        }
    }
}
