//! BiasValidationEngine — implements IBiasValidator, owns the validated
//! configuration, and exposes single-compound and batch validation.

use std::sync::atomic::AtomicBool;

use tkbias_core::config::BiasConfig;
use tkbias_core::errors::{BiasResult, ConfigError};
use tkbias_core::models::{
    AttributionMap, CompoundInput, CulturalFeatureSet, ScoredResult, TraditionalSource,
};
use tkbias_core::traits::{IAttributionProvider, IBiasValidator, ITraditionalKnowledgeStore};

use crate::batch::{resolve_inputs, BatchAggregator, BatchReport, CompoundRequest};
use crate::orchestrator::{self, ValidationContext};

/// Cultural-bias validation engine.
///
/// Configuration is checked once in [`BiasValidationEngine::new`]; an engine
/// that exists always holds valid thresholds.
#[derive(Debug, Clone)]
pub struct BiasValidationEngine {
    config: BiasConfig,
    cultural_features: CulturalFeatureSet,
}

impl BiasValidationEngine {
    pub fn new(config: BiasConfig, cultural_features: CulturalFeatureSet) -> BiasResult<Self> {
        config.validate()?;
        if cultural_features.is_empty() {
            return Err(ConfigError::EmptyFeatureSet.into());
        }
        Ok(Self {
            config,
            cultural_features,
        })
    }

    /// Engine with default thresholds.
    pub fn with_features(cultural_features: CulturalFeatureSet) -> BiasResult<Self> {
        Self::new(BiasConfig::default(), cultural_features)
    }

    pub fn config(&self) -> &BiasConfig {
        &self.config
    }

    pub fn cultural_features(&self) -> &CulturalFeatureSet {
        &self.cultural_features
    }

    pub fn context(&self) -> ValidationContext<'_> {
        ValidationContext {
            thresholds: &self.config.thresholds,
            cultural_features: &self.cultural_features,
            reconciliation_tolerance: self.config.compensation.reconciliation_tolerance,
        }
    }

    /// Validate one compound. A missing `base_value` falls back to the
    /// configured default.
    pub fn validate_compound(
        &self,
        compound_id: &str,
        attributions: &AttributionMap,
        sources: &[TraditionalSource],
        base_value: Option<f64>,
    ) -> BiasResult<ScoredResult> {
        let base_value = base_value.or(self.config.compensation.default_base_value);
        orchestrator::validate(compound_id, attributions, sources, base_value, &self.context())
    }

    /// Validate a batch on the configured worker pool.
    pub fn validate_batch(&self, inputs: &[CompoundInput]) -> BiasResult<BatchReport> {
        BatchAggregator::new(self, self.config.batch.worker_threads).run(inputs)
    }

    /// Validate a batch, stopping early once `cancel` is set.
    pub fn validate_batch_until(
        &self,
        inputs: &[CompoundInput],
        cancel: &AtomicBool,
    ) -> BiasResult<BatchReport> {
        BatchAggregator::new(self, self.config.batch.worker_threads).run_until(inputs, cancel)
    }

    /// Look up every compound through the collaborators, then validate the
    /// resolved inputs. Lookup failures are reported alongside validation
    /// failures.
    pub fn validate_from_providers(
        &self,
        requests: &[CompoundRequest],
        provider: &dyn IAttributionProvider,
        store: &dyn ITraditionalKnowledgeStore,
    ) -> BiasResult<BatchReport> {
        let (inputs, lookup_failures) = resolve_inputs(requests, provider, store);
        let mut report = self.validate_batch(&inputs)?;
        report.summary.merge(&lookup_failures);
        Ok(report)
    }
}

impl IBiasValidator for BiasValidationEngine {
    fn validate(&self, input: &CompoundInput) -> BiasResult<ScoredResult> {
        self.validate_compound(
            &input.compound_id,
            &input.attributions,
            &input.sources,
            input.base_value,
        )
    }
}
