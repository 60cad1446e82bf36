use crate::errors::BiasResult;
use crate::models::{CompoundInput, ScoredResult};

/// Cultural-bias validation of a single compound.
pub trait IBiasValidator: Send + Sync {
    /// Score a compound, returning its immutable result.
    fn validate(&self, input: &CompoundInput) -> BiasResult<ScoredResult>;
}
