/// Attribution aggregation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttributionError {
    #[error("attribution map is empty for compound {compound_id}")]
    EmptyAttribution { compound_id: String },

    #[error("all attributions are zero for compound {compound_id}")]
    DegenerateAttribution { compound_id: String },

    #[error("non-finite attribution for feature {feature} of compound {compound_id}")]
    NonFiniteAttribution { compound_id: String, feature: String },
}
