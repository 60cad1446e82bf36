//! Validation orchestrator: drives one compound through the validation
//! lifecycle and assembles its immutable result.
//!
//! Degraded inputs (all-zero attributions, no cultural features, no usable
//! traditional sources) still produce a result; only malformed inputs fail.

use tkbias_core::config::BiasThresholds;
use tkbias_core::errors::{AttributionError, BiasError, BiasResult, SourceError};
use tkbias_core::fingerprint;
use tkbias_core::models::{
    AttributionMap, BiasStatus, CulturalFeatureSet, Degradation, ScoredResult, TraditionalSource,
    ValidationState,
};
use tkbias_observability::tracing_setup::events;
use tracing::debug;

use crate::attribution;
use crate::compensation;
use crate::recommendations::{self, RecommendationInput};
use crate::scorer;
use crate::sources::{self, CombinedSources};

/// Shared, read-only settings for validating compounds.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub thresholds: &'a BiasThresholds,
    pub cultural_features: &'a CulturalFeatureSet,
    /// Relative tolerance for allocation reconciliation.
    pub reconciliation_tolerance: f64,
}

/// Lifecycle tracker for one compound. Only legal transitions are accepted.
#[derive(Debug)]
pub struct ValidationRun<'a> {
    compound_id: &'a str,
    state: ValidationState,
    trail: Vec<ValidationState>,
}

impl<'a> ValidationRun<'a> {
    pub fn new(compound_id: &'a str) -> Self {
        Self {
            compound_id,
            state: ValidationState::Pending,
            trail: vec![ValidationState::Pending],
        }
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    pub fn advance(&mut self, next: ValidationState) -> BiasResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(BiasError::InvalidTransition {
                from: self.state.to_string(),
                to: next.to_string(),
            });
        }
        debug!(compound_id = %self.compound_id, from = %self.state, to = %next, "validation transition");
        self.state = next;
        self.trail.push(next);
        Ok(())
    }

    pub fn into_trail(self) -> Vec<ValidationState> {
        self.trail
    }
}

/// Validate one compound.
///
/// A negative or non-finite `base_value` is rejected before any state is
/// entered.
pub fn validate(
    compound_id: &str,
    attributions: &AttributionMap,
    traditional_sources: &[TraditionalSource],
    base_value: Option<f64>,
    ctx: &ValidationContext<'_>,
) -> BiasResult<ScoredResult> {
    let thresholds = ctx.thresholds;
    thresholds.validate()?;
    if let Some(value) = base_value {
        compensation::check_base_value(value)?;
    }

    let mut run = ValidationRun::new(compound_id);
    let mut degradations = Vec::new();

    // PENDING → ATTRIBUTED
    let partition = attribution::partition(compound_id, attributions, ctx.cultural_features)?;
    let traditional_weight = match partition.traditional_weight(compound_id) {
        Ok(weight) => {
            if !partition.has_cultural_features() {
                degradations.push(Degradation::NoCulturalFeatures);
            }
            weight
        }
        Err(AttributionError::DegenerateAttribution { .. }) => {
            degradations.push(Degradation::DegenerateAttribution);
            0.0
        }
        Err(e) => return Err(e.into()),
    };
    let attribution_degraded = !degradations.is_empty();
    run.advance(ValidationState::Attributed)?;

    // ATTRIBUTED → AGGREGATED (→ LIMITED_KNOWLEDGE)
    let mut combined = match sources::combine(traditional_sources, thresholds.minimum_confidence) {
        Ok(combined) => {
            run.advance(ValidationState::Aggregated)?;
            combined
        }
        Err(SourceError::NoTraditionalKnowledge { .. }) => {
            run.advance(ValidationState::Aggregated)?;
            run.advance(ValidationState::LimitedKnowledge)?;
            degradations.push(Degradation::LimitedKnowledge);
            CombinedSources::limited(traditional_sources, thresholds.minimum_confidence)
        }
        Err(e) => return Err(e.into()),
    };
    if attribution_degraded {
        combined.aggregate_confidence = 0.0;
    }

    // → SCORED → {ACCEPTED | FLAGGED | REJECTED}
    let bias = scorer::score(traditional_weight, combined.aggregate_confidence, thresholds);
    run.advance(ValidationState::Scored)?;
    run.advance(ValidationState::outcome_for(bias.status))?;

    // → COMPENSATED
    let mut compensation = compensation::compute(
        traditional_weight,
        &combined,
        traditional_sources,
        base_value,
        ctx.reconciliation_tolerance,
    )?;
    if bias.status == BiasStatus::Biased {
        compensation = compensation.withhold();
    }
    run.advance(ValidationState::Compensated)?;

    let recommendations = recommendations::recommend_with_degradations(
        RecommendationInput {
            status: bias.status,
            traditional_weight,
            aggregate_confidence: combined.aggregate_confidence,
        },
        thresholds,
        &degradations,
    );
    for degradation in &degradations {
        events::degradation_triggered(compound_id, *degradation);
    }

    let input_fingerprint = fingerprint::compute(
        compound_id,
        attributions,
        traditional_sources,
        thresholds,
        base_value,
    );

    // → FINALIZED
    run.advance(ValidationState::Finalized)?;
    events::compound_scored(
        compound_id,
        bias.status,
        bias.cultural_bias_score,
        compensation.compensation_due,
    );

    Ok(ScoredResult {
        compound_id: compound_id.to_string(),
        traditional_weight,
        aggregate_confidence: combined.aggregate_confidence,
        cultural_bias_score: bias.cultural_bias_score,
        status: bias.status,
        compensation_due: compensation.compensation_due,
        compensation_withheld: compensation.withheld,
        per_source_allocation: compensation.allocation,
        recommendations,
        degradations,
        states: run.into_trail(),
        input_fingerprint,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_rejects_illegal_transition() {
        let mut run = ValidationRun::new("c");
        let err = run.advance(ValidationState::Scored).unwrap_err();
        assert_eq!(
            err,
            BiasError::InvalidTransition {
                from: "PENDING".into(),
                to: "SCORED".into()
            }
        );
        assert_eq!(run.state(), ValidationState::Pending);
    }

    #[test]
    fn run_records_trail() {
        let mut run = ValidationRun::new("c");
        run.advance(ValidationState::Attributed).unwrap();
        run.advance(ValidationState::Aggregated).unwrap();
        run.advance(ValidationState::LimitedKnowledge).unwrap();
        assert_eq!(
            run.into_trail(),
            vec![
                ValidationState::Pending,
                ValidationState::Attributed,
                ValidationState::Aggregated,
                ValidationState::LimitedKnowledge
            ]
        );
    }
}
