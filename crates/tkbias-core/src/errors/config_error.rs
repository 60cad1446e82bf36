/// Configuration errors. All of these are fatal: they are raised before any
/// compound is processed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid thresholds: {reason}")]
    InvalidThreshold { reason: String },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("default base value must be finite and non-negative, got {value}")]
    InvalidDefaultValue { value: f64 },

    #[error("cultural feature set is empty; no attribution could be classified as cultural")]
    EmptyFeatureSet,

    #[error("config parse error: {0}")]
    Parse(String),
}
