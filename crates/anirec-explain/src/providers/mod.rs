//! Explainer registry.
//!
//! `none` disables explanations, `template` is always available offline,
//! `ollama` needs a reachable local server.

pub mod ollama_explainer;
pub mod template_explainer;

pub use ollama_explainer::OllamaExplainer;
pub use template_explainer::TemplateExplainer;

use anirec_core::config::ExplainConfig;
use anirec_core::traits::IExplainer;
use tracing::{info, warn};

use crate::cache::CachedExplainer;

/// Build the configured explainer, or `None` when explanations are off.
///
/// An unreachable Ollama server is kept (and reports itself unavailable)
/// rather than swapped for another explainer, so callers see no text
/// instead of different text.
pub fn create_explainer(config: &ExplainConfig) -> Option<Box<dyn IExplainer>> {
    match config.provider.as_str() {
        "none" => {
            info!("explanations disabled");
            None
        }
        "template" => {
            info!(explainer = "template", "using template explainer");
            Some(Box::new(TemplateExplainer::new()))
        }
        "ollama" => {
            let explainer = OllamaExplainer::new(config);
            if explainer.health_check() {
                info!(explainer = "ollama", model = %config.model, "explainer connected");
            } else {
                warn!(url = %config.base_url, "Ollama unavailable, explanations will be omitted");
            }
            Some(Box::new(CachedExplainer::new(
                Box::new(explainer),
                config.cache_size,
            )))
        }
        other => {
            warn!(provider = %other, "unknown explainer, explanations disabled");
            None
        }
    }
}
