use super::{CatalogError, ConfigError, ExplainError, RecommendError};

/// Top-level error for every anirec crate.
#[derive(Debug, thiserror::Error)]
pub enum AnirecError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("recommend error: {0}")]
    RecommendError(#[from] RecommendError),

    #[error("explain error: {0}")]
    ExplainError(#[from] ExplainError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type AnirecResult<T> = Result<T, AnirecError>;
