//! # wayfarer-observability
//!
//! Structured logging for the inference engine: subscriber setup driven by
//! `ObservabilityConfig`, span macros, and one helper per logged event.

pub mod tracing_setup;

pub use tracing_setup::{events, init_from_config, init_tracing, init_tracing_with_filter};
