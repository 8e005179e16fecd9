//! Configuration: one struct per subsystem, aggregated by [`AnirecConfig`].

mod anirec_config;
mod catalog_config;
pub mod defaults;
mod explain_config;
mod observability_config;
mod recommend_config;
mod vectorizer_config;

pub use anirec_config::{AnirecConfig, CliOverrides};
pub use catalog_config::CatalogConfig;
pub use explain_config::ExplainConfig;
pub use observability_config::ObservabilityConfig;
pub use recommend_config::{RecommendConfig, UnknownTitlePolicy};
pub use vectorizer_config::{StopWords, VectorizerConfig};
