// Single source of truth for all default values.

// --- Thresholds ---
pub const DEFAULT_MINIMUM_WEIGHT: f64 = 0.15;
pub const DEFAULT_MAXIMUM_WEIGHT: f64 = 0.60;
pub const DEFAULT_ALERT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_REJECTION_THRESHOLD: f64 = 0.40;
pub const DEFAULT_MINIMUM_CONFIDENCE: f64 = 0.60;

// --- Compensation ---
pub const DEFAULT_RECONCILIATION_TOLERANCE: f64 = 1e-9;

// --- Batch ---
pub const DEFAULT_WORKER_THREADS: usize = 0; // 0 = rayon default

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "tkbias=info";
pub const LOG_ENV_VAR: &str = "TKBIAS_LOG";
