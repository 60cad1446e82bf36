use super::{AttributionError, CompensationError, ConfigError, SourceError};

/// Top-level error type for bias validation.
/// All subsystem errors convert into this via `From` impls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BiasError {
    #[error("attribution error: {0}")]
    Attribution(#[from] AttributionError),

    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("compensation error: {0}")]
    Compensation(#[from] CompensationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid validation transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("provider failure for compound {compound_id}: {reason}")]
    ProviderFailure { compound_id: String, reason: String },

    #[error("concurrency error: {0}")]
    Concurrency(String),
}

impl BiasError {
    /// Whether the orchestrator can continue on a degraded path.
    ///
    /// Degenerate attributions and missing traditional knowledge downgrade the
    /// result instead of failing it. Everything else either fails the single
    /// compound or, for configuration, the whole batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BiasError::Attribution(AttributionError::DegenerateAttribution { .. })
                | BiasError::Source(SourceError::NoTraditionalKnowledge { .. })
        )
    }

    /// Whether this error must abort a batch before any work begins.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BiasError::Config(_) | BiasError::Concurrency(_))
    }
}

/// Convenience type alias.
pub type BiasResult<T> = Result<T, BiasError>;
