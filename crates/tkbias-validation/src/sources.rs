//! Source confidence combiner: reduce traditional-knowledge records to one
//! aggregate confidence and a normalized share per source.
//!
//! Sources below the confidence cutoff stay in the output with share 0, so
//! they are reported but carry no weight.

use tkbias_core::errors::SourceError;
use tkbias_core::models::TraditionalSource;

/// Normalized share of one source, aligned with the input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceShare {
    pub share: f64,
    /// Below the confidence cutoff.
    pub excluded: bool,
}

/// Combined view of a compound's sources.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedSources {
    pub aggregate_confidence: f64,
    /// One entry per input source, same order. Usable shares sum to 1.
    pub shares: Vec<SourceShare>,
}

impl CombinedSources {
    /// Conservative stand-in used on the limited-knowledge path: zero
    /// confidence and zero shares, sources retained for reporting.
    pub fn limited(sources: &[TraditionalSource], minimum_confidence: f64) -> Self {
        Self {
            aggregate_confidence: 0.0,
            shares: sources
                .iter()
                .map(|s| SourceShare {
                    share: 0.0,
                    excluded: s.confidence < minimum_confidence,
                })
                .collect(),
        }
    }

    pub fn usable_count(&self) -> usize {
        self.shares.iter().filter(|s| s.share > 0.0).count()
    }
}

/// Combine sources into an aggregate confidence and per-source shares.
///
/// Each usable source weighs `weight_override` if set, else its confidence;
/// weights are normalized to sum to 1 and the aggregate confidence is the
/// share-weighted mean of confidences. Returns `NoTraditionalKnowledge` when
/// nothing usable remains.
pub fn combine(
    sources: &[TraditionalSource],
    minimum_confidence: f64,
) -> Result<CombinedSources, SourceError> {
    for (index, source) in sources.iter().enumerate() {
        if !source.confidence.is_finite() || !(0.0..=1.0).contains(&source.confidence) {
            return Err(SourceError::InvalidConfidence {
                index,
                culture: source.culture.clone(),
                confidence: source.confidence,
            });
        }
        if let Some(weight) = source.weight_override {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SourceError::InvalidWeightOverride {
                    index,
                    culture: source.culture.clone(),
                    weight,
                });
            }
        }
    }

    let below_cutoff = sources
        .iter()
        .filter(|s| s.confidence < minimum_confidence)
        .count();

    let usable_weights = || {
        sources
            .iter()
            .filter(|s| s.confidence >= minimum_confidence)
            .map(TraditionalSource::raw_weight)
    };

    // Large overrides can overflow the total; normalize against the largest
    // weight in that case.
    let mut scale = 1.0;
    let mut total_weight: f64 = usable_weights().sum();
    if !total_weight.is_finite() {
        scale = usable_weights().fold(0.0, f64::max);
        total_weight = usable_weights().map(|w| w / scale).sum();
    }

    if total_weight <= 0.0 {
        return Err(SourceError::NoTraditionalKnowledge {
            supplied: sources.len(),
            below_cutoff,
        });
    }

    let shares: Vec<SourceShare> = sources
        .iter()
        .map(|s| {
            if s.confidence >= minimum_confidence {
                SourceShare {
                    share: (s.raw_weight() / scale) / total_weight,
                    excluded: false,
                }
            } else {
                SourceShare {
                    share: 0.0,
                    excluded: true,
                }
            }
        })
        .collect();

    let aggregate_confidence = sources
        .iter()
        .zip(&shares)
        .map(|(s, share)| share.share * s.confidence)
        .sum::<f64>()
        .clamp(0.0, 1.0);

    Ok(CombinedSources {
        aggregate_confidence,
        shares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sources_signal_no_knowledge() {
        let err = combine(&[], 0.6).unwrap_err();
        assert_eq!(
            err,
            SourceError::NoTraditionalKnowledge {
                supplied: 0,
                below_cutoff: 0
            }
        );
    }

    #[test]
    fn shares_are_confidence_weighted() {
        let sources = vec![
            TraditionalSource::new("Andean", 0.9, "infusion"),
            TraditionalSource::new("Amazonian", 0.6, "poultice"),
        ];
        let combined = combine(&sources, 0.6).unwrap();
        assert!((combined.shares[0].share - 0.6).abs() < 1e-12);
        assert!((combined.shares[1].share - 0.4).abs() < 1e-12);
        // 0.6 * 0.9 + 0.4 * 0.6
        assert!((combined.aggregate_confidence - 0.78).abs() < 1e-12);
    }

    #[test]
    fn low_confidence_sources_are_retained_with_zero_share() {
        let sources = vec![
            TraditionalSource::new("Sami", 0.3, "oral account"),
            TraditionalSource::new("Ainu", 0.8, "written record"),
        ];
        let combined = combine(&sources, 0.6).unwrap();
        assert_eq!(combined.shares.len(), 2);
        assert!(combined.shares[0].excluded);
        assert_eq!(combined.shares[0].share, 0.0);
        assert_eq!(combined.shares[1].share, 1.0);
        assert!((combined.aggregate_confidence - 0.8).abs() < 1e-12);
        assert_eq!(combined.usable_count(), 1);
    }

    #[test]
    fn all_below_cutoff_is_no_knowledge() {
        let sources = vec![
            TraditionalSource::new("A", 0.2, "x"),
            TraditionalSource::new("B", 0.5, "y"),
        ];
        assert_eq!(
            combine(&sources, 0.6).unwrap_err(),
            SourceError::NoTraditionalKnowledge {
                supplied: 2,
                below_cutoff: 2
            }
        );
    }

    #[test]
    fn weight_override_replaces_confidence_for_share_only() {
        let sources = vec![
            TraditionalSource::new("A", 0.9, "x").with_weight_override(3.0),
            TraditionalSource::new("B", 0.6, "y").with_weight_override(1.0),
        ];
        let combined = combine(&sources, 0.6).unwrap();
        assert!((combined.shares[0].share - 0.75).abs() < 1e-12);
        // 0.75 * 0.9 + 0.25 * 0.6
        assert!((combined.aggregate_confidence - 0.825).abs() < 1e-12);
    }

    #[test]
    fn invalid_confidence_and_override_are_rejected() {
        let bad_conf = vec![TraditionalSource::new("A", 1.5, "x")];
        assert!(matches!(
            combine(&bad_conf, 0.6),
            Err(SourceError::InvalidConfidence { index: 0, .. })
        ));
        let bad_weight = vec![
            TraditionalSource::new("A", 0.9, "x"),
            TraditionalSource::new("B", 0.9, "y").with_weight_override(-1.0),
        ];
        assert!(matches!(
            combine(&bad_weight, 0.6),
            Err(SourceError::InvalidWeightOverride { index: 1, .. })
        ));
    }

    #[test]
    fn huge_overrides_still_normalize() {
        let sources = vec![
            TraditionalSource::new("A", 0.9, "x").with_weight_override(1e308),
            TraditionalSource::new("B", 0.7, "y").with_weight_override(1e308),
        ];
        let combined = combine(&sources, 0.6).unwrap();
        assert!((combined.shares[0].share - 0.5).abs() < 1e-12);
        assert!((combined.shares[1].share - 0.5).abs() < 1e-12);
        assert!((combined.aggregate_confidence - 0.8).abs() < 1e-12);
    }

    #[test]
    fn zero_overrides_leave_nothing_usable() {
        let sources = vec![TraditionalSource::new("A", 0.9, "x").with_weight_override(0.0)];
        assert!(matches!(
            combine(&sources, 0.6),
            Err(SourceError::NoTraditionalKnowledge { supplied: 1, below_cutoff: 0 })
        ));
    }
}
