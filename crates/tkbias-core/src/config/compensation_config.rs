use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Compensation subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompensationConfig {
    /// Base value used for compounds that do not carry their own.
    /// `None` means compensation is opt-in per compound.
    pub default_base_value: Option<f64>,
    /// Relative tolerance for allocation reconciliation.
    pub reconciliation_tolerance: f64,
}

impl CompensationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(value) = self.default_base_value {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDefaultValue { value });
            }
        }
        if !self.reconciliation_tolerance.is_finite() || self.reconciliation_tolerance < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "reconciliation_tolerance".to_string(),
                value: self.reconciliation_tolerance,
            });
        }
        Ok(())
    }
}

impl Default for CompensationConfig {
    fn default() -> Self {
        Self {
            default_base_value: None,
            reconciliation_tolerance: defaults::DEFAULT_RECONCILIATION_TOLERANCE,
        }
    }
}
