//! # anirec-observability
//!
//! Structured tracing (subscriber setup plus named log events) and
//! in-process recommendation metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::RecommendationMetrics;
pub use tracing_setup::init_tracing;
