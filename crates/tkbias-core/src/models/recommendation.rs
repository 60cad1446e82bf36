use std::fmt;

use serde::{Deserialize, Serialize};

/// Corrective action attached to a scored result.
///
/// The first four variants are produced by the rule engine in this fixed
/// order; the remaining ones are appended by degraded orchestrator paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// BIASED with weight below the band.
    IncreaseSourceCoverage,
    /// BIASED with weight above the band.
    RebalanceEvidence,
    /// Aggregate confidence below the minimum.
    SeekHigherConfidence,
    /// CAUTION outcome.
    ManualReview,
    /// No usable traditional-knowledge sources.
    LimitedEvidence,
    /// Every attribution was zero.
    DegenerateAttribution,
    /// No attribution matched the cultural feature set.
    NoCulturalFeatures,
}

impl Recommendation {
    pub fn message(self) -> &'static str {
        match self {
            Recommendation::IncreaseSourceCoverage => {
                "Increase traditional-knowledge source coverage."
            }
            Recommendation::RebalanceEvidence => {
                "Reduce over-reliance on traditional-knowledge features; rebalance with independent chemical/biological evidence."
            }
            Recommendation::SeekHigherConfidence => {
                "Seek higher-confidence traditional-knowledge documentation before publication."
            }
            Recommendation::ManualReview => {
                "Flag for manual review; proceed with documented caveats."
            }
            Recommendation::LimitedEvidence => {
                "Limited traditional-knowledge evidence: scored on attributions alone with zero source confidence."
            }
            Recommendation::DegenerateAttribution => {
                "All feature attributions are zero; regenerate attributions before relying on this score."
            }
            Recommendation::NoCulturalFeatures => {
                "No attributed feature is classified as cultural; verify the cultural feature set."
            }
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why a result was produced on a degraded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degradation {
    LimitedKnowledge,
    DegenerateAttribution,
    NoCulturalFeatures,
}

impl Degradation {
    /// The recommendation appended when this degradation occurs.
    pub fn recommendation(self) -> Recommendation {
        match self {
            Degradation::LimitedKnowledge => Recommendation::LimitedEvidence,
            Degradation::DegenerateAttribution => Recommendation::DegenerateAttribution,
            Degradation::NoCulturalFeatures => Recommendation::NoCulturalFeatures,
        }
    }
}
