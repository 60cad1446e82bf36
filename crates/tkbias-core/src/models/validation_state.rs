use std::fmt;

use serde::{Deserialize, Serialize};

use super::BiasStatus;

/// Per-compound validation lifecycle.
///
/// ```text
/// PENDING → ATTRIBUTED → AGGREGATED → SCORED → {ACCEPTED | FLAGGED | REJECTED} → COMPENSATED → FINALIZED
///                             └→ LIMITED_KNOWLEDGE ┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationState {
    Pending,
    Attributed,
    Aggregated,
    LimitedKnowledge,
    Scored,
    Accepted,
    Flagged,
    Rejected,
    Compensated,
    Finalized,
}

impl ValidationState {
    /// Whether `self → next` is a legal transition.
    pub fn can_transition_to(self, next: ValidationState) -> bool {
        use ValidationState::*;
        matches!(
            (self, next),
            (Pending, Attributed)
                | (Attributed, Aggregated)
                | (Aggregated, Scored)
                | (Aggregated, LimitedKnowledge)
                | (LimitedKnowledge, Scored)
                | (Scored, Accepted)
                | (Scored, Flagged)
                | (Scored, Rejected)
                | (Accepted, Compensated)
                | (Flagged, Compensated)
                | (Rejected, Compensated)
                | (Compensated, Finalized)
        )
    }

    /// Outcome state reached from SCORED for a given status.
    pub fn outcome_for(status: BiasStatus) -> ValidationState {
        match status {
            BiasStatus::Safe => ValidationState::Accepted,
            BiasStatus::Caution => ValidationState::Flagged,
            BiasStatus::Biased => ValidationState::Rejected,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == ValidationState::Finalized
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationState::Pending => "PENDING",
            ValidationState::Attributed => "ATTRIBUTED",
            ValidationState::Aggregated => "AGGREGATED",
            ValidationState::LimitedKnowledge => "LIMITED_KNOWLEDGE",
            ValidationState::Scored => "SCORED",
            ValidationState::Accepted => "ACCEPTED",
            ValidationState::Flagged => "FLAGGED",
            ValidationState::Rejected => "REJECTED",
            ValidationState::Compensated => "COMPENSATED",
            ValidationState::Finalized => "FINALIZED",
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
