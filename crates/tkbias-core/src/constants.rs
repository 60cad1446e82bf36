/// Fraction of the raw bias that full confidence can remove.
/// A score is never dampened by more than half.
pub const CONFIDENCE_DAMPENING: f64 = 0.5;

/// Prefix applied to the fingerprint digest so formats can be told apart.
pub const FINGERPRINT_VERSION: &str = "tkb1";
