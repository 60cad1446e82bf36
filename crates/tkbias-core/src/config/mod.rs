pub mod batch_config;
pub mod compensation_config;
pub mod defaults;
pub mod thresholds;

use serde::{Deserialize, Serialize};

pub use batch_config::BatchConfig;
pub use compensation_config::CompensationConfig;
pub use thresholds::BiasThresholds;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BiasConfig {
    pub thresholds: BiasThresholds,
    pub compensation: CompensationConfig,
    pub batch: BatchConfig,
}

impl BiasConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    ///
    /// The loaded config is validated before it is returned.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Run every subsystem check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.compensation.validate()?;
        Ok(())
    }
}
