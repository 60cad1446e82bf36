mod attribution_error;
mod bias_error;
mod compensation_error;
mod config_error;
mod source_error;

pub use attribution_error::AttributionError;
pub use bias_error::{BiasError, BiasResult};
pub use compensation_error::CompensationError;
pub use config_error::ConfigError;
pub use source_error::SourceError;
