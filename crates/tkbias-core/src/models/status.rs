use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete bias verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiasStatus {
    Safe,
    Caution,
    Biased,
}

impl fmt::Display for BiasStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BiasStatus::Safe => "SAFE",
            BiasStatus::Caution => "CAUTION",
            BiasStatus::Biased => "BIASED",
        };
        f.write_str(s)
    }
}
