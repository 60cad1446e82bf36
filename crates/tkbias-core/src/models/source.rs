use serde::{Deserialize, Serialize};

/// One traditional-knowledge record backing a compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraditionalSource {
    /// Culture or community the knowledge originates from.
    pub culture: String,
    /// Confidence in the record, in [0, 1].
    pub confidence: f64,
    /// Provenance or traditional preparation notes.
    pub provenance: String,
    /// Replaces `confidence` as the normalization weight when set.
    #[serde(default)]
    pub weight_override: Option<f64>,
}

impl TraditionalSource {
    pub fn new(culture: impl Into<String>, confidence: f64, provenance: impl Into<String>) -> Self {
        Self {
            culture: culture.into(),
            confidence,
            provenance: provenance.into(),
            weight_override: None,
        }
    }

    pub fn with_weight_override(mut self, weight: f64) -> Self {
        self.weight_override = Some(weight);
        self
    }

    /// Raw (un-normalized) share weight.
    pub fn raw_weight(&self) -> f64 {
        self.weight_override.unwrap_or(self.confidence)
    }
}
