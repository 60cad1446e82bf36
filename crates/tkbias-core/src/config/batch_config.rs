use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch subsystem configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Size of the bounded worker pool. 0 uses rayon's default parallelism.
    pub worker_threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            worker_threads: defaults::DEFAULT_WORKER_THREADS,
        }
    }
}
