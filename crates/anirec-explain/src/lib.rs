//! # anirec-explain
//!
//! Optional explanation collaborators. Nothing here is on the ranking path:
//! a missing or failing explainer only means recommendations carry no text.
//!
//! - [`providers::OllamaExplainer`]: local LLM over HTTP
//! - [`providers::TemplateExplainer`]: offline fixed sentences
//! - [`CachedExplainer`]: moka cache in front of any explainer

pub mod cache;
pub mod overview;
pub mod prompt;
pub mod providers;

pub use cache::CachedExplainer;
pub use overview::model_overview;
pub use providers::{create_explainer, OllamaExplainer, TemplateExplainer};
