//! # biosearch-observability
//!
//! Structured tracing for the retrieval engine: subscriber setup, named spans
//! for build, search, embedding and cache I/O, and the structured events
//! emitted at each of those stages.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, events, init_tracing, spans};
