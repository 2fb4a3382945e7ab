//! # cadence-observability
//!
//! Structured logging for the evaluation pipeline: subscriber setup,
//! span macros, and one event function per pipeline milestone.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
