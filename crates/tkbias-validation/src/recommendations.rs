//! Rule-based recommendation engine.
//!
//! Rules run in a fixed priority order and each contributes at most one
//! recommendation.

use tkbias_core::config::BiasThresholds;
use tkbias_core::models::{BiasStatus, Degradation, Recommendation};

/// The scoring facts the rules read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationInput {
    pub status: BiasStatus,
    pub traditional_weight: f64,
    pub aggregate_confidence: f64,
}

/// Evaluate the four rules in order.
pub fn recommend(input: RecommendationInput, thresholds: &BiasThresholds) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if input.status == BiasStatus::Biased && input.traditional_weight < thresholds.minimum_weight {
        out.push(Recommendation::IncreaseSourceCoverage);
    }
    if input.status == BiasStatus::Biased && input.traditional_weight > thresholds.maximum_weight {
        out.push(Recommendation::RebalanceEvidence);
    }
    if input.aggregate_confidence < thresholds.minimum_confidence {
        out.push(Recommendation::SeekHigherConfidence);
    }
    if input.status == BiasStatus::Caution {
        out.push(Recommendation::ManualReview);
    }

    out
}

/// Rule output followed by one note per degradation, without duplicates.
pub fn recommend_with_degradations(
    input: RecommendationInput,
    thresholds: &BiasThresholds,
    degradations: &[Degradation],
) -> Vec<Recommendation> {
    let mut out = recommend(input, thresholds);
    for degradation in degradations {
        let rec = degradation.recommendation();
        if !out.contains(&rec) {
            out.push(rec);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(status: BiasStatus, weight: f64, confidence: f64) -> RecommendationInput {
        RecommendationInput {
            status,
            traditional_weight: weight,
            aggregate_confidence: confidence,
        }
    }

    #[test]
    fn safe_and_confident_has_no_recommendations() {
        let recs = recommend(input(BiasStatus::Safe, 0.3, 0.9), &BiasThresholds::default());
        assert!(recs.is_empty());
    }

    #[test]
    fn biased_low_weight_and_low_confidence_in_order() {
        let t = BiasThresholds::new(0.5, 0.6, 0.1, 0.2, 0.6).unwrap();
        let recs = recommend(input(BiasStatus::Biased, 0.05, 0.3), &t);
        assert_eq!(
            recs,
            vec![
                Recommendation::IncreaseSourceCoverage,
                Recommendation::SeekHigherConfidence
            ]
        );
    }

    #[test]
    fn biased_high_weight_rebalances() {
        let recs = recommend(input(BiasStatus::Biased, 0.95, 0.9), &BiasThresholds::default());
        assert_eq!(recs, vec![Recommendation::RebalanceEvidence]);
    }

    #[test]
    fn caution_with_low_confidence_orders_confidence_first() {
        let recs = recommend(input(BiasStatus::Caution, 0.9, 0.2), &BiasThresholds::default());
        assert_eq!(
            recs,
            vec![
                Recommendation::SeekHigherConfidence,
                Recommendation::ManualReview
            ]
        );
    }

    #[test]
    fn degradations_append_after_rules() {
        let recs = recommend_with_degradations(
            input(BiasStatus::Safe, 0.3, 0.0),
            &BiasThresholds::default(),
            &[Degradation::LimitedKnowledge],
        );
        assert_eq!(
            recs,
            vec![
                Recommendation::SeekHigherConfidence,
                Recommendation::LimitedEvidence
            ]
        );
    }
}
