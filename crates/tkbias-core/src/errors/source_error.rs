/// Traditional-knowledge source errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    #[error("no usable traditional knowledge: {supplied} supplied, {below_cutoff} below confidence cutoff")]
    NoTraditionalKnowledge { supplied: usize, below_cutoff: usize },

    #[error("source {index} ({culture}) has confidence {confidence} outside [0, 1]")]
    InvalidConfidence {
        index: usize,
        culture: String,
        confidence: f64,
    },

    #[error("source {index} ({culture}) has invalid weight override {weight}")]
    InvalidWeightOverride {
        index: usize,
        culture: String,
        weight: f64,
    },
}
