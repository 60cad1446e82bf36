use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Acceptable traditional-weight band and the score cutoffs for flagging and
/// rejecting a compound.
///
/// Invariants: every field is finite and in [0, 1],
/// `minimum_weight <= maximum_weight`, `alert_threshold <= rejection_threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiasThresholds {
    /// Lower edge of the bias band.
    pub minimum_weight: f64,
    /// Upper edge of the bias band.
    pub maximum_weight: f64,
    /// Scores at or above this are flagged (CAUTION).
    pub alert_threshold: f64,
    /// Scores at or above this are rejected (BIASED).
    pub rejection_threshold: f64,
    /// Sources below this confidence are excluded from share normalization.
    pub minimum_confidence: f64,
}

impl BiasThresholds {
    /// Build thresholds and validate them once.
    pub fn new(
        minimum_weight: f64,
        maximum_weight: f64,
        alert_threshold: f64,
        rejection_threshold: f64,
        minimum_confidence: f64,
    ) -> Result<Self, ConfigError> {
        let thresholds = Self {
            minimum_weight,
            maximum_weight,
            alert_threshold,
            rejection_threshold,
            minimum_confidence,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Check range and ordering invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("minimum_weight", self.minimum_weight),
            ("maximum_weight", self.maximum_weight),
            ("alert_threshold", self.alert_threshold),
            ("rejection_threshold", self.rejection_threshold),
            ("minimum_confidence", self.minimum_confidence),
        ];
        for (field, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.minimum_weight > self.maximum_weight {
            return Err(ConfigError::InvalidThreshold {
                reason: format!(
                    "minimum_weight {} exceeds maximum_weight {}",
                    self.minimum_weight, self.maximum_weight
                ),
            });
        }
        if self.alert_threshold > self.rejection_threshold {
            return Err(ConfigError::InvalidThreshold {
                reason: format!(
                    "alert_threshold {} exceeds rejection_threshold {}",
                    self.alert_threshold, self.rejection_threshold
                ),
            });
        }
        Ok(())
    }

    /// Whether a traditional weight sits inside `[minimum_weight, maximum_weight]`.
    pub fn in_band(&self, traditional_weight: f64) -> bool {
        traditional_weight >= self.minimum_weight && traditional_weight <= self.maximum_weight
    }
}

impl Default for BiasThresholds {
    fn default() -> Self {
        Self {
            minimum_weight: defaults::DEFAULT_MINIMUM_WEIGHT,
            maximum_weight: defaults::DEFAULT_MAXIMUM_WEIGHT,
            alert_threshold: defaults::DEFAULT_ALERT_THRESHOLD,
            rejection_threshold: defaults::DEFAULT_REJECTION_THRESHOLD,
            minimum_confidence: defaults::DEFAULT_MINIMUM_CONFIDENCE,
        }
    }
}
