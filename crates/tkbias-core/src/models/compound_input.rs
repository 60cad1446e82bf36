use serde::{Deserialize, Serialize};

use super::{AttributionMap, TraditionalSource};

/// Everything needed to validate one compound, resolved in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundInput {
    pub compound_id: String,
    pub attributions: AttributionMap,
    #[serde(default)]
    pub sources: Vec<TraditionalSource>,
    /// Economic value for compensation. Falls back to the configured default.
    #[serde(default)]
    pub base_value: Option<f64>,
}

impl CompoundInput {
    pub fn new(compound_id: impl Into<String>, attributions: AttributionMap) -> Self {
        Self {
            compound_id: compound_id.into(),
            attributions,
            sources: Vec::new(),
            base_value: None,
        }
    }

    pub fn with_sources(mut self, sources: Vec<TraditionalSource>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = Some(base_value);
        self
    }
}
