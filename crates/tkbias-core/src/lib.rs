//! # tkbias-core
//!
//! Foundation crate for traditional-knowledge bias validation.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fingerprint;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BiasConfig, BiasThresholds};
pub use errors::{BiasError, BiasResult};
pub use models::{
    AttributionMap, BatchSummary, BiasStatus, CompoundInput, CulturalFeatureSet, ScoredResult,
    TraditionalSource,
};
