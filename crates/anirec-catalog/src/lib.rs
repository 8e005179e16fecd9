//! # anirec-catalog
//!
//! Reads a tabular catalog (CSV with headers) into an immutable
//! [`Catalog`](anirec_core::Catalog), normalizing missing descriptions, and
//! reports dataset statistics.

pub mod loader;
pub mod preprocess;
pub mod stats;

pub use loader::{load_catalog, read_catalog};
pub use stats::CatalogStats;
