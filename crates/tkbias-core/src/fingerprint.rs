//! Deterministic digest of validation inputs.

use crate::config::BiasThresholds;
use crate::constants::FINGERPRINT_VERSION;
use crate::models::{AttributionMap, TraditionalSource};

/// blake3 digest over the canonical byte form of one validation call's inputs.
///
/// Floats are hashed by their bit patterns, strings are length-prefixed, and
/// attributions are visited in key order, so identical inputs always produce
/// the same digest.
pub fn compute(
    compound_id: &str,
    attributions: &AttributionMap,
    sources: &[TraditionalSource],
    thresholds: &BiasThresholds,
    base_value: Option<f64>,
) -> String {
    let mut hasher = blake3::Hasher::new();
    write_str(&mut hasher, FINGERPRINT_VERSION);
    write_str(&mut hasher, compound_id);

    hasher.update(&(attributions.len() as u64).to_le_bytes());
    for (feature, value) in attributions.iter() {
        write_str(&mut hasher, feature);
        write_f64(&mut hasher, value);
    }

    hasher.update(&(sources.len() as u64).to_le_bytes());
    for source in sources {
        write_str(&mut hasher, &source.culture);
        write_f64(&mut hasher, source.confidence);
        write_str(&mut hasher, &source.provenance);
        write_opt_f64(&mut hasher, source.weight_override);
    }

    write_f64(&mut hasher, thresholds.minimum_weight);
    write_f64(&mut hasher, thresholds.maximum_weight);
    write_f64(&mut hasher, thresholds.alert_threshold);
    write_f64(&mut hasher, thresholds.rejection_threshold);
    write_f64(&mut hasher, thresholds.minimum_confidence);
    write_opt_f64(&mut hasher, base_value);

    hasher.finalize().to_hex().to_string()
}

fn write_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn write_f64(hasher: &mut blake3::Hasher, v: f64) {
    hasher.update(&v.to_bits().to_le_bytes());
}

fn write_opt_f64(hasher: &mut blake3::Hasher, v: Option<f64>) {
    match v {
        Some(v) => {
            hasher.update(&[1]);
            write_f64(hasher, v);
        }
        None => {
            hasher.update(&[0]);
        }
    }
}
