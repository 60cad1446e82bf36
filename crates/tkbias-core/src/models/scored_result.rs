use serde::{Deserialize, Serialize};

use super::{BiasStatus, Degradation, Recommendation, ValidationState};

/// Compensation share and amount owed to one traditional-knowledge source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceAllocation {
    pub culture: String,
    pub provenance: String,
    pub confidence: f64,
    /// Normalized share in [0, 1]. Zero for excluded sources.
    pub share: f64,
    /// Amount allocated to this source.
    pub amount: f64,
    /// Excluded from normalization for falling below the confidence cutoff.
    pub excluded: bool,
}

/// Final verdict for one compound. Produced once per validation call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub compound_id: String,
    /// Fraction of absolute attribution mass on cultural features, in [0, 1].
    pub traditional_weight: f64,
    /// Share-weighted confidence of the usable sources, in [0, 1].
    pub aggregate_confidence: f64,
    /// Bounded bias score in [0, 1].
    pub cultural_bias_score: f64,
    pub status: BiasStatus,
    pub compensation_due: f64,
    /// True when a REJECTED outcome zeroed an otherwise non-zero amount.
    pub compensation_withheld: bool,
    /// Per-source breakdown, in the order the sources were supplied.
    pub per_source_allocation: Vec<SourceAllocation>,
    pub recommendations: Vec<Recommendation>,
    pub degradations: Vec<Degradation>,
    /// States traversed, `PENDING` through `FINALIZED`.
    pub states: Vec<ValidationState>,
    /// blake3 digest of the canonicalised inputs.
    pub input_fingerprint: String,
}

impl ScoredResult {
    /// Recommendation texts in priority order.
    pub fn recommendation_messages(&self) -> Vec<String> {
        self.recommendations
            .iter()
            .map(|r| r.message().to_string())
            .collect()
    }

    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }

    pub fn has_degradation(&self, degradation: Degradation) -> bool {
        self.degradations.contains(&degradation)
    }

    pub fn passed_through(&self, state: ValidationState) -> bool {
        self.states.contains(&state)
    }

    /// Sum of per-source allocated amounts.
    pub fn allocated_total(&self) -> f64 {
        self.per_source_allocation.iter().map(|a| a.amount).sum()
    }
}
