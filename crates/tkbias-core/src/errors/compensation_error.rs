/// Compensation arithmetic errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompensationError {
    #[error("base value must be non-negative, got {value}")]
    NegativeValue { value: f64 },

    #[error("base value must be finite, got {value}")]
    NonFiniteValue { value: f64 },

    #[error("compensation amount is not finite: {value}")]
    NonFiniteAmount { value: f64 },

    #[error("allocation does not reconcile: expected {expected}, allocated {allocated}")]
    AllocationMismatch { expected: f64, allocated: f64 },
}
