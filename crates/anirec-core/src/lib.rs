//! # anirec-core
//!
//! Foundation crate for the anirec recommender.
//! Defines the catalog model, recommendation types, provider traits,
//! errors, config, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AnirecConfig;
pub use errors::{AnirecError, AnirecResult};
pub use models::{Catalog, Item, Recommendation, RecommendationSet};
