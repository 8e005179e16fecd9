//! # anirec-recommend
//!
//! Ranks catalog items against a set of favorite titles.
//!
//! - [`ranking`]: the deterministic scoring over a similarity matrix.
//! - [`providers`]: ranking strategies behind `IRecommendationProvider`.
//! - [`degradation`]: priority chain with fallback and event recording.
//! - [`engine`]: owns the current index, validates requests, applies the
//!   unknown-title policy, attaches explanations, and keeps metrics.

pub mod degradation;
pub mod engine;
pub mod providers;
pub mod ranking;

pub use degradation::DegradationChain;
pub use engine::RecommendationEngine;
pub use providers::{MatrixProvider, TfIdfProvider};
pub use ranking::{rank, recommend, unknown_favorites};
