//! # tkbias-observability
//!
//! Tracing subscriber setup and the structured events emitted while
//! validating compounds.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter};
