//! Attribution aggregation: split a compound's attribution mass into cultural
//! and non-cultural evidence.

use tkbias_core::errors::AttributionError;
use tkbias_core::models::{AttributionMap, CulturalFeatureSet};

/// Absolute attribution mass, split by feature classification.
///
/// When the raw sums would overflow, both are expressed in units of the
/// largest magnitude instead; only their ratio is meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    /// Sum of |value| over cultural features.
    pub cultural_sum_abs: f64,
    /// Sum of |value| over all features.
    pub total_sum_abs: f64,
    /// Number of features classified as cultural.
    pub cultural_features: usize,
}

impl Partition {
    /// Fraction of attribution mass on cultural features, in [0, 1].
    ///
    /// Fails with `DegenerateAttribution` when every attribution is zero.
    pub fn traditional_weight(&self, compound_id: &str) -> Result<f64, AttributionError> {
        if self.total_sum_abs > 0.0 {
            Ok((self.cultural_sum_abs / self.total_sum_abs).clamp(0.0, 1.0))
        } else {
            Err(AttributionError::DegenerateAttribution {
                compound_id: compound_id.to_string(),
            })
        }
    }

    pub fn has_cultural_features(&self) -> bool {
        self.cultural_features > 0
    }
}

/// Partition an attribution map by the cultural feature set.
///
/// Rejects empty maps and non-finite values; pure otherwise.
pub fn partition(
    compound_id: &str,
    attributions: &AttributionMap,
    cultural_features: &CulturalFeatureSet,
) -> Result<Partition, AttributionError> {
    if attributions.is_empty() {
        return Err(AttributionError::EmptyAttribution {
            compound_id: compound_id.to_string(),
        });
    }

    let mut cultural_sum_abs = 0.0;
    let mut total_sum_abs = 0.0;
    let mut max_abs: f64 = 0.0;
    let mut cultural_count = 0;

    for (feature, value) in attributions.iter() {
        if !value.is_finite() {
            return Err(AttributionError::NonFiniteAttribution {
                compound_id: compound_id.to_string(),
                feature: feature.to_string(),
            });
        }
        let magnitude = value.abs();
        max_abs = max_abs.max(magnitude);
        total_sum_abs += magnitude;
        if cultural_features.is_cultural(feature) {
            cultural_sum_abs += magnitude;
            cultural_count += 1;
        }
    }

    // Finite values can still overflow the sum.
    if !total_sum_abs.is_finite() {
        cultural_sum_abs = 0.0;
        total_sum_abs = 0.0;
        for (feature, value) in attributions.iter() {
            let scaled = value.abs() / max_abs;
            total_sum_abs += scaled;
            if cultural_features.is_cultural(feature) {
                cultural_sum_abs += scaled;
            }
        }
    }

    Ok(Partition {
        cultural_sum_abs,
        total_sum_abs,
        cultural_features: cultural_count,
    })
}
