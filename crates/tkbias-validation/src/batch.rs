//! Batch aggregator: validate many compounds on a bounded worker pool and
//! reduce the independent results into one summary.
//!
//! Each compound maps to an outcome with no shared state; the summary is
//! built by folding outcomes afterwards. A failing compound lands in
//! `BatchSummary::failures` and never aborts the batch.

use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tkbias_core::errors::{BiasError, BiasResult};
use tkbias_core::models::{BatchSummary, CompoundInput, ScoredResult};
use tkbias_core::traits::{IAttributionProvider, IBiasValidator, ITraditionalKnowledgeStore};
use tkbias_observability::tracing_setup::events;
use tracing::{debug, info};

/// Summary plus per-compound detail for one batch run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub summary: BatchSummary,
    /// Scored results, in input order.
    pub results: Vec<ScoredResult>,
    /// Compounds not attempted because the batch was cancelled.
    pub skipped: Vec<String>,
}

impl BatchReport {
    /// Combine the report of a disjoint sub-batch into this one.
    pub fn merge(&mut self, other: BatchReport) {
        self.summary.merge(&other.summary);
        self.results.extend(other.results);
        self.skipped.extend(other.skipped);
    }
}

/// What happened to one compound.
#[derive(Debug, Clone, PartialEq)]
pub enum CompoundOutcome {
    Scored(ScoredResult),
    Failed { compound_id: String, reason: String },
    Skipped { compound_id: String },
}

/// A compound to look up through the collaborator seams.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundRequest {
    pub compound_id: String,
    pub base_value: Option<f64>,
}

impl CompoundRequest {
    pub fn new(compound_id: impl Into<String>) -> Self {
        Self {
            compound_id: compound_id.into(),
            base_value: None,
        }
    }

    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = Some(base_value);
        self
    }
}

/// Runs a validator over many compounds in parallel.
pub struct BatchAggregator<'v, V: IBiasValidator + ?Sized> {
    validator: &'v V,
    worker_threads: usize,
}

impl<'v, V: IBiasValidator + ?Sized> BatchAggregator<'v, V> {
    /// `worker_threads == 0` uses rayon's default parallelism.
    pub fn new(validator: &'v V, worker_threads: usize) -> Self {
        Self {
            validator,
            worker_threads,
        }
    }

    /// Validate every input.
    pub fn run(&self, inputs: &[CompoundInput]) -> BiasResult<BatchReport> {
        let never = AtomicBool::new(false);
        self.run_until(inputs, &never)
    }

    /// Validate inputs until `cancel` is set. Compounds already started finish;
    /// the rest are reported as skipped and the summary covers only what
    /// completed.
    pub fn run_until(&self, inputs: &[CompoundInput], cancel: &AtomicBool) -> BiasResult<BatchReport> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_threads)
            .build()
            .map_err(|e| BiasError::Concurrency(e.to_string()))?;

        debug!(
            compounds = inputs.len(),
            workers = pool.current_num_threads(),
            "starting batch"
        );

        let outcomes: Vec<CompoundOutcome> = pool.install(|| {
            inputs
                .par_iter()
                .map(|input| self.run_one(input, cancel))
                .collect()
        });

        let report = fold_outcomes(outcomes);
        if report.summary.cancelled {
            events::batch_cancelled(report.summary.total_compounds, inputs.len());
        }
        events::batch_completed(&report.summary);
        Ok(report)
    }

    fn run_one(&self, input: &CompoundInput, cancel: &AtomicBool) -> CompoundOutcome {
        if cancel.load(Ordering::Acquire) {
            return CompoundOutcome::Skipped {
                compound_id: input.compound_id.clone(),
            };
        }
        match self.validator.validate(input) {
            Ok(result) => CompoundOutcome::Scored(result),
            Err(e) => {
                let reason = e.to_string();
                events::compound_failed(&input.compound_id, &reason);
                CompoundOutcome::Failed {
                    compound_id: input.compound_id.clone(),
                    reason,
                }
            }
        }
    }
}

/// Reduce outcomes, in order, into a report.
pub fn fold_outcomes(outcomes: Vec<CompoundOutcome>) -> BatchReport {
    let mut report = BatchReport::default();
    for outcome in outcomes {
        match outcome {
            CompoundOutcome::Scored(result) => {
                report.summary.record_result(&result);
                report.results.push(result);
            }
            CompoundOutcome::Failed {
                compound_id,
                reason,
            } => report.summary.record_failure(compound_id, reason),
            CompoundOutcome::Skipped { compound_id } => report.skipped.push(compound_id),
        }
    }
    report.summary.cancelled = !report.skipped.is_empty();
    report
}

/// Resolve attributions and traditional sources for every request before
/// validation begins. Lookup failures are returned as a failure-only summary.
pub fn resolve_inputs(
    requests: &[CompoundRequest],
    provider: &dyn IAttributionProvider,
    store: &dyn ITraditionalKnowledgeStore,
) -> (Vec<CompoundInput>, BatchSummary) {
    let mut inputs = Vec::with_capacity(requests.len());
    let mut failures = BatchSummary::new();

    for request in requests {
        let resolved = provider
            .attributions(&request.compound_id)
            .and_then(|attributions| {
                store
                    .sources(&request.compound_id)
                    .map(|sources| (attributions, sources))
            });
        match resolved {
            Ok((attributions, sources)) => inputs.push(CompoundInput {
                compound_id: request.compound_id.clone(),
                attributions,
                sources,
                base_value: request.base_value,
            }),
            Err(e) => {
                let reason = e.to_string();
                events::compound_failed(&request.compound_id, &reason);
                failures.record_failure(request.compound_id.clone(), reason);
            }
        }
    }

    info!(
        resolved = inputs.len(),
        failed = failures.failure_count(),
        "resolved batch inputs"
    );
    (inputs, failures)
}
