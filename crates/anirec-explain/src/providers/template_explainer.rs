//! Offline explainer built from fixed sentences.

use anirec_core::errors::AnirecResult;
use anirec_core::models::{Item, Recommendation};
use anirec_core::traits::IExplainer;

use crate::prompt;

/// Always-available explainer that needs no network.
#[derive(Debug, Clone, Default)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    pub fn new() -> Self {
        Self
    }
}

impl IExplainer for TemplateExplainer {
    fn explain(&self, recommendation: &Recommendation, favorites: &[String]) -> AnirecResult<String> {
        if favorites.is_empty() {
            return Ok(format!(
                "{} is recommended based on similar themes.",
                recommendation.title
            ));
        }
        Ok(format!(
            "{} shares themes with {} (similarity {:.2}).",
            recommendation.title,
            favorites.join(", "),
            recommendation.score
        ))
    }

    fn pitch(&self, item: &Item) -> AnirecResult<String> {
        Ok(prompt::fallback_pitch(item))
    }

    fn name(&self) -> &str {
        "template"
    }

    fn is_available(&self) -> bool {
        true
    }
}
