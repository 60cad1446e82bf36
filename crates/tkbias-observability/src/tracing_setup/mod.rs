//! Tracing setup — structured logging with named event types.

pub mod events;

use std::sync::Once;

use tkbias_core::config::defaults::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the `TKBIAS_LOG` environment variable for per-module levels, e.g.
/// `TKBIAS_LOG=tkbias_validation=debug`. Falls back to `tkbias=info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Initialize tracing with a custom filter string and JSON output
/// (for tests or embedding).
///
/// Shares the guard with [`init_tracing`]: whichever runs first installs the
/// process-wide subscriber, and later calls to either are no-ops. Call this
/// before anything else logs if the JSON format or filter matters.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init();
    });
}
