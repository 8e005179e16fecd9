//! Error taxonomy: one enum per subsystem, folded into [`AnirecError`].

mod anirec_error;
mod catalog_error;
mod config_error;
mod explain_error;
mod recommend_error;

pub use anirec_error::{AnirecError, AnirecResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use explain_error::ExplainError;
pub use recommend_error::RecommendError;
