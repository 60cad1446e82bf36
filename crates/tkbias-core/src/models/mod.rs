pub mod attribution;
pub mod batch_summary;
pub mod compound_input;
pub mod recommendation;
pub mod scored_result;
pub mod source;
pub mod status;
pub mod validation_state;

pub use attribution::{AttributionMap, CulturalFeatureSet};
pub use batch_summary::{BatchFailure, BatchSummary};
pub use compound_input::CompoundInput;
pub use recommendation::{Degradation, Recommendation};
pub use scored_result::{ScoredResult, SourceAllocation};
pub use source::TraditionalSource;
pub use status::BiasStatus;
pub use validation_state::ValidationState;
