//! Bias scorer: turn a traditional weight and aggregate confidence into a
//! bounded bias score and a status.

use tkbias_core::config::BiasThresholds;
use tkbias_core::constants::CONFIDENCE_DAMPENING;
use tkbias_core::models::BiasStatus;

/// Score plus the band distances it was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasScore {
    /// Distance below `minimum_weight` (0 when not below).
    pub deficit: f64,
    /// Distance above `maximum_weight` (0 when not above).
    pub excess: f64,
    pub cultural_bias_score: f64,
    pub status: BiasStatus,
}

/// Score a traditional weight against the bias band.
///
/// `score = clamp(deficit + excess, 0, 1) * (1 - 0.5 * confidence)`. Full
/// confidence halves the score at most, so an out-of-band weight is never
/// scored zero. Status cutoffs are inclusive.
pub fn score(
    traditional_weight: f64,
    aggregate_confidence: f64,
    thresholds: &BiasThresholds,
) -> BiasScore {
    let deficit = if traditional_weight < thresholds.minimum_weight {
        thresholds.minimum_weight - traditional_weight
    } else {
        0.0
    };
    let excess = if traditional_weight > thresholds.maximum_weight {
        traditional_weight - thresholds.maximum_weight
    } else {
        0.0
    };

    let raw_bias = (deficit + excess).clamp(0.0, 1.0);
    let confidence = aggregate_confidence.clamp(0.0, 1.0);
    let cultural_bias_score = raw_bias * (1.0 - CONFIDENCE_DAMPENING * confidence);

    BiasScore {
        deficit,
        excess,
        cultural_bias_score,
        status: classify(cultural_bias_score, thresholds),
    }
}

/// Map a score to a status. A score exactly on a cutoff takes the stricter status.
pub fn classify(cultural_bias_score: f64, thresholds: &BiasThresholds) -> BiasStatus {
    if cultural_bias_score >= thresholds.rejection_threshold {
        BiasStatus::Biased
    } else if cultural_bias_score >= thresholds.alert_threshold {
        BiasStatus::Caution
    } else {
        BiasStatus::Safe
    }
}
