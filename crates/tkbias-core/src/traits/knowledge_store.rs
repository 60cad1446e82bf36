use crate::errors::BiasResult;
use crate::models::TraditionalSource;

/// Lookup of traditional-knowledge records by compound.
pub trait ITraditionalKnowledgeStore: Send + Sync {
    /// Records for a compound, in the store's reporting order.
    /// An unknown compound yields an empty list, not an error.
    fn sources(&self, compound_id: &str) -> BiasResult<Vec<TraditionalSource>>;
}
