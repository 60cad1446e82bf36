//! Structured log events for key validation operations.
//!
//! Each function emits a `tracing` event with structured fields.

use tkbias_core::models::{BatchSummary, BiasStatus, Degradation};

/// Log a compound reaching FINALIZED.
pub fn compound_scored(compound_id: &str, status: BiasStatus, bias_score: f64, compensation: f64) {
    tracing::info!(
        event = "compound_scored",
        compound_id = %compound_id,
        status = %status,
        bias_score = bias_score,
        compensation = compensation,
        "compound scored"
    );
}

/// Log a degraded validation path.
pub fn degradation_triggered(compound_id: &str, degradation: Degradation) {
    tracing::warn!(
        event = "degradation_triggered",
        compound_id = %compound_id,
        degradation = ?degradation,
        "validation degraded"
    );
}

/// Log a compound captured as a batch failure.
pub fn compound_failed(compound_id: &str, reason: &str) {
    tracing::warn!(
        event = "compound_failed",
        compound_id = %compound_id,
        reason = %reason,
        "compound failed"
    );
}

/// Log batch completion.
pub fn batch_completed(summary: &BatchSummary) {
    tracing::info!(
        event = "batch_completed",
        total = summary.total_compounds,
        scored = summary.scored_count,
        failed = summary.failures.len(),
        high_bias = summary.high_bias_count,
        mean_bias = summary.mean_bias_score,
        total_compensation = summary.total_compensation,
        "batch completed"
    );
}

/// Log a batch stopped by cancellation.
pub fn batch_cancelled(completed: usize, requested: usize) {
    tracing::warn!(
        event = "batch_cancelled",
        completed = completed,
        requested = requested,
        "batch cancelled; returning partial summary"
    );
}
