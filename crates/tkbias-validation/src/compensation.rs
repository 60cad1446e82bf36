//! Compensation calculator: amount owed to traditional-knowledge contributors
//! and its allocation across sources.

use tkbias_core::errors::CompensationError;
use tkbias_core::models::{SourceAllocation, TraditionalSource};

use crate::sources::CombinedSources;

/// Amount owed and its per-source breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Compensation {
    pub compensation_due: f64,
    pub allocation: Vec<SourceAllocation>,
    pub withheld: bool,
}

impl Compensation {
    /// No base value supplied: nothing owed, nothing allocated.
    pub fn none() -> Self {
        Self {
            compensation_due: 0.0,
            allocation: Vec::new(),
            withheld: false,
        }
    }

    /// Zero the amount while keeping the allocation entries for reporting.
    pub fn withhold(mut self) -> Self {
        self.withheld = self.compensation_due > 0.0;
        self.compensation_due = 0.0;
        for entry in &mut self.allocation {
            entry.amount = 0.0;
        }
        self
    }

    pub fn allocated_total(&self) -> f64 {
        self.allocation.iter().map(|a| a.amount).sum()
    }
}

/// Reject base values that cannot be compensated against.
pub fn check_base_value(base_value: f64) -> Result<(), CompensationError> {
    if !base_value.is_finite() {
        return Err(CompensationError::NonFiniteValue { value: base_value });
    }
    if base_value < 0.0 {
        return Err(CompensationError::NegativeValue { value: base_value });
    }
    Ok(())
}

/// Compute `base_value * traditional_weight * aggregate_confidence` and split
/// it by source share.
///
/// The last source with a non-zero share absorbs the rounding remainder so the
/// allocation reconciles with the total; the result is then checked against
/// `tolerance` (relative).
pub fn compute(
    traditional_weight: f64,
    combined: &CombinedSources,
    sources: &[TraditionalSource],
    base_value: Option<f64>,
    tolerance: f64,
) -> Result<Compensation, CompensationError> {
    let Some(base_value) = base_value else {
        return Ok(Compensation::none());
    };
    check_base_value(base_value)?;

    let compensation_due = base_value * traditional_weight * combined.aggregate_confidence;
    if !compensation_due.is_finite() {
        return Err(CompensationError::NonFiniteAmount {
            value: compensation_due,
        });
    }

    let mut allocation: Vec<SourceAllocation> = sources
        .iter()
        .zip(&combined.shares)
        .map(|(source, share)| SourceAllocation {
            culture: source.culture.clone(),
            provenance: source.provenance.clone(),
            confidence: source.confidence,
            share: share.share,
            amount: compensation_due * share.share,
            excluded: share.excluded,
        })
        .collect();

    if let Some(last) = allocation.iter().rposition(|a| a.share > 0.0) {
        let others: f64 = allocation
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != last)
            .map(|(_, a)| a.amount)
            .sum();
        allocation[last].amount = (compensation_due - others).max(0.0);
    }

    let compensation = Compensation {
        compensation_due,
        allocation,
        withheld: false,
    };
    reconcile(&compensation, tolerance)?;
    Ok(compensation)
}

/// Verify the allocation sums to the amount due.
pub fn reconcile(compensation: &Compensation, tolerance: f64) -> Result<(), CompensationError> {
    if compensation.allocation.is_empty() {
        return Ok(());
    }
    let allocated = compensation.allocated_total();
    let expected = compensation.compensation_due;
    let bound = tolerance * expected.abs().max(1.0);
    if !allocated.is_finite() || !expected.is_finite() || (allocated - expected).abs() > bound {
        return Err(CompensationError::AllocationMismatch {
            expected,
            allocated,
        });
    }
    Ok(())
}
