//! # tkbias-validation
//!
//! Scores therapeutic-compound validation models for cultural bias: whether a
//! model under- or over-weights traditional-knowledge evidence relative to
//! chemical and biological evidence.
//!
//! ## Pipeline
//! 1. **Attribution** — split attribution mass into cultural and non-cultural
//! 2. **Sources** — combine traditional-knowledge records into one confidence
//! 3. **Scorer** — band distance dampened by confidence → SAFE / CAUTION / BIASED
//! 4. **Compensation** — amount owed to contributors and its allocation
//! 5. **Recommendations** — ordered corrective actions
//!
//! The orchestrator sequences these per compound; the batch aggregator runs
//! compounds in parallel and folds their results into a summary.

pub mod attribution;
pub mod batch;
pub mod compensation;
pub mod engine;
pub mod orchestrator;
pub mod recommendations;
pub mod scorer;
pub mod sources;

pub use batch::{BatchAggregator, BatchReport, CompoundRequest};
pub use engine::BiasValidationEngine;
pub use orchestrator::ValidationContext;
