use serde::{Deserialize, Serialize};

use super::{BiasStatus, Degradation, ScoredResult};

/// A compound that could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BatchFailure {
    pub compound_id: String,
    pub reason: String,
}

/// Aggregate statistics over a batch.
///
/// Every field is a sum, a count, or derived from them, so `merge` is
/// commutative and associative: merging partial summaries in any order gives
/// the summary of the union.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Scored plus failed compounds.
    pub total_compounds: usize,
    pub scored_count: usize,
    /// Sum of bias scores over scored compounds; backs the running mean.
    pub total_bias_score: f64,
    pub mean_bias_score: f64,
    /// Compounds with status BIASED.
    pub high_bias_count: usize,
    pub caution_count: usize,
    pub safe_count: usize,
    pub limited_knowledge_count: usize,
    pub total_compensation: f64,
    /// Sorted by compound id, then reason.
    pub failures: Vec<BatchFailure>,
    /// Set when the batch stopped before every compound was attempted.
    pub cancelled: bool,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary of a single scored compound.
    pub fn from_result(result: &ScoredResult) -> Self {
        let mut summary = Self::new();
        summary.record_result(result);
        summary
    }

    /// Summary of a single failed compound.
    pub fn from_failure(compound_id: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut summary = Self::new();
        summary.record_failure(compound_id, reason);
        summary
    }

    pub fn record_result(&mut self, result: &ScoredResult) {
        self.total_compounds += 1;
        self.scored_count += 1;
        self.total_bias_score += result.cultural_bias_score;
        self.total_compensation += result.compensation_due;
        match result.status {
            BiasStatus::Biased => self.high_bias_count += 1,
            BiasStatus::Caution => self.caution_count += 1,
            BiasStatus::Safe => self.safe_count += 1,
        }
        if result.has_degradation(Degradation::LimitedKnowledge) {
            self.limited_knowledge_count += 1;
        }
        self.refresh_mean();
    }

    pub fn record_failure(&mut self, compound_id: impl Into<String>, reason: impl Into<String>) {
        self.total_compounds += 1;
        let failure = BatchFailure {
            compound_id: compound_id.into(),
            reason: reason.into(),
        };
        let pos = self
            .failures
            .binary_search(&failure)
            .unwrap_or_else(|pos| pos);
        self.failures.insert(pos, failure);
    }

    /// Fold another partial summary into this one.
    pub fn merge(&mut self, other: &BatchSummary) {
        self.total_compounds += other.total_compounds;
        self.scored_count += other.scored_count;
        self.total_bias_score += other.total_bias_score;
        self.high_bias_count += other.high_bias_count;
        self.caution_count += other.caution_count;
        self.safe_count += other.safe_count;
        self.limited_knowledge_count += other.limited_knowledge_count;
        self.total_compensation += other.total_compensation;
        self.cancelled |= other.cancelled;
        self.failures.extend(other.failures.iter().cloned());
        self.failures.sort();
        self.refresh_mean();
    }

    /// By-value merge, usable as a reduction operator.
    pub fn merged(mut self, other: BatchSummary) -> BatchSummary {
        self.merge(&other);
        self
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn refresh_mean(&mut self) {
        self.mean_bias_score = if self.scored_count == 0 {
            0.0
        } else {
            self.total_bias_score / self.scored_count as f64
        };
    }
}
