use crate::errors::BiasResult;
use crate::models::AttributionMap;

/// Source of per-feature attribution values (tree, linear, or kernel explainer).
pub trait IAttributionProvider: Send + Sync {
    /// Attribution values for one compound's prediction.
    fn attributions(&self, compound_id: &str) -> BiasResult<AttributionMap>;
}
