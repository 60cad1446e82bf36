use proptest::prelude::*;

use tkbias_core::config::{BiasConfig, BiasThresholds};
use tkbias_core::models::{AttributionMap, BatchSummary, CompoundInput, CulturalFeatureSet, TraditionalSource};
use tkbias_core::traits::IBiasValidator;
use tkbias_validation::attribution::partition;
use tkbias_validation::batch::{fold_outcomes, CompoundOutcome};
use tkbias_validation::scorer::score;
use tkbias_validation::BiasValidationEngine;

fn features() -> CulturalFeatureSet {
    CulturalFeatureSet::default().with_prefix("tk_")
}

fn engine() -> BiasValidationEngine {
    BiasValidationEngine::new(BiasConfig::default(), features()).unwrap()
}

fn attribution_map() -> impl Strategy<Value = AttributionMap> {
    prop::collection::btree_map("(tk_|mol_)[a-z]{1,6}", -5.0f64..5.0, 1..12)
        .prop_map(|m| m.into_iter().collect())
}

fn source() -> impl Strategy<Value = TraditionalSource> {
    ("[A-Z][a-z]{2,8}", 0.0f64..=1.0).prop_map(|(culture, confidence)| {
        TraditionalSource::new(culture, confidence, "recorded use")
    })
}

fn compound() -> impl Strategy<Value = CompoundInput> {
    (
        "[a-z0-9]{4,10}",
        attribution_map(),
        prop::collection::vec(source(), 0..5),
        prop::option::of(0.0f64..1_000_000.0),
    )
        .prop_map(|(id, attributions, sources, base_value)| {
            let input = CompoundInput::new(id, attributions).with_sources(sources);
            match base_value {
                Some(v) => input.with_base_value(v),
                None => input,
            }
        })
}

fn summarize(inputs: &[CompoundInput]) -> BatchSummary {
    let engine = engine();
    let outcomes = inputs
        .iter()
        .map(|input| match engine.validate(input) {
            Ok(result) => CompoundOutcome::Scored(result),
            Err(e) => CompoundOutcome::Failed {
                compound_id: input.compound_id.clone(),
                reason: e.to_string(),
            },
        })
        .collect();
    fold_outcomes(outcomes).summary
}

fn assert_close(a: &BatchSummary, b: &BatchSummary) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.total_compounds, b.total_compounds);
    prop_assert_eq!(a.scored_count, b.scored_count);
    prop_assert_eq!(a.high_bias_count, b.high_bias_count);
    prop_assert_eq!(a.caution_count, b.caution_count);
    prop_assert_eq!(a.safe_count, b.safe_count);
    prop_assert_eq!(a.limited_knowledge_count, b.limited_knowledge_count);
    prop_assert_eq!(&a.failures, &b.failures);
    prop_assert!((a.mean_bias_score - b.mean_bias_score).abs() < 1e-9);
    prop_assert!((a.total_compensation - b.total_compensation).abs() <= 1e-6 * a.total_compensation.max(1.0));
    Ok(())
}

proptest! {
    #[test]
    fn traditional_weight_is_a_fraction(attributions in attribution_map()) {
        let p = partition("c", &attributions, &features()).unwrap();
        if let Ok(weight) = p.traditional_weight("c") {
            prop_assert!((0.0..=1.0).contains(&weight));
        }
    }

    #[test]
    fn traditional_weight_is_a_fraction_at_extreme_magnitudes(
        values in prop::collection::btree_map("(tk_|mol_)[a-z]{1,6}", prop::num::f64::NORMAL, 1..12),
    ) {
        let attributions: AttributionMap = values.into_iter().collect();
        let p = partition("c", &attributions, &features()).unwrap();
        if let Ok(weight) = p.traditional_weight("c") {
            prop_assert!((0.0..=1.0).contains(&weight));
        }
    }

    #[test]
    fn score_is_zero_inside_band(w in 0.15f64..=0.60, conf in 0.0f64..=1.0) {
        let s = score(w, conf, &BiasThresholds::default());
        prop_assert_eq!(s.cultural_bias_score, 0.0);
    }

    #[test]
    fn score_is_positive_outside_band(
        w in prop_oneof![0.0f64..0.149, 0.601f64..=1.0],
        conf in 0.0f64..=1.0,
    ) {
        let s = score(w, conf, &BiasThresholds::default());
        prop_assert!(s.cultural_bias_score > 0.0);
        prop_assert!(s.cultural_bias_score <= 1.0);
    }

    #[test]
    fn score_grows_with_excess(a in 0.61f64..0.99, delta in 0.001f64..0.01, conf in 0.0f64..=1.0) {
        let t = BiasThresholds::default();
        let lower = score(a, conf, &t).cultural_bias_score;
        let higher = score(a + delta, conf, &t).cultural_bias_score;
        prop_assert!(higher > lower);
    }

    #[test]
    fn score_grows_with_deficit(a in 0.01f64..0.14, delta in 0.001f64..0.01, conf in 0.0f64..=1.0) {
        let t = BiasThresholds::default();
        let nearer = score(a, conf, &t).cultural_bias_score;
        let further = score(a - delta, conf, &t).cultural_bias_score;
        prop_assert!(further > nearer);
    }

    #[test]
    fn higher_confidence_never_raises_score(w in 0.0f64..=1.0, c1 in 0.0f64..=1.0, c2 in 0.0f64..=1.0) {
        let t = BiasThresholds::default();
        let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        prop_assert!(score(w, hi, &t).cultural_bias_score <= score(w, lo, &t).cultural_bias_score);
    }

    #[test]
    fn allocation_reconciles_with_compensation(input in compound()) {
        if let Ok(result) = engine().validate(&input) {
            prop_assert!(result.compensation_due >= 0.0);
            prop_assert!(result.allocated_total() >= 0.0);
            if !result.per_source_allocation.is_empty() {
                let bound = 1e-9 * result.compensation_due.max(1.0);
                prop_assert!((result.allocated_total() - result.compensation_due).abs() <= bound);
            }
        }
    }

    #[test]
    fn validation_is_idempotent(input in compound()) {
        let engine = engine();
        prop_assert_eq!(engine.validate(&input), engine.validate(&input));
    }

    #[test]
    fn merge_matches_single_pass(inputs in prop::collection::vec(compound(), 0..12), split in 0usize..12) {
        let split = split.min(inputs.len());
        let whole = summarize(&inputs);
        let merged = summarize(&inputs[..split]).merged(summarize(&inputs[split..]));
        assert_close(&whole, &merged)?;
    }

    #[test]
    fn merge_is_commutative(
        left in prop::collection::vec(compound(), 0..6),
        right in prop::collection::vec(compound(), 0..6),
    ) {
        let a = summarize(&left);
        let b = summarize(&right);
        assert_close(&a.clone().merged(b.clone()), &b.merged(a))?;
    }
}
