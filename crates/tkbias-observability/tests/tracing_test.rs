//! Tests for tracing setup and structured events.

use std::sync::Mutex;

use tkbias_core::models::{BatchSummary, BiasStatus, Degradation};
use tkbias_observability::tracing_setup::events;
use tkbias_observability::{init_tracing, init_tracing_with_filter};

/// Serializes tests that touch `TKBIAS_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn per_crate_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("TKBIAS_LOG", "tkbias_validation=debug,tkbias_core=warn");
    init_tracing();
    std::env::remove_var("TKBIAS_LOG");
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
}

#[test]
fn filtered_init_after_default_is_a_no_op() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with_filter("tkbias=debug");
    init_tracing_with_filter("tkbias=trace");
}

#[test]
fn malformed_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("TKBIAS_LOG", "tkbias=[not a level");
    init_tracing();
    std::env::remove_var("TKBIAS_LOG");
}

#[test]
fn events_emit_with_subscriber_installed() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();

    events::compound_scored("cmp-1", BiasStatus::Caution, 0.252, 576.0);
    events::degradation_triggered("cmp-2", Degradation::LimitedKnowledge);
    events::compound_failed("cmp-3", "attribution map is empty");

    let mut summary = BatchSummary::new();
    summary.record_failure("cmp-3", "attribution map is empty");
    events::batch_completed(&summary);
    events::batch_cancelled(1, 10);
}
