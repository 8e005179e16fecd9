use crate::errors::AnirecResult;
use crate::models::{Item, Recommendation};

/// Generates human-readable text around recommendations.
pub trait IExplainer: Send + Sync {
    /// Explain why `recommendation` suits someone who liked `favorites`.
    fn explain(&self, recommendation: &Recommendation, favorites: &[String])
        -> AnirecResult<String>;

    /// A short pitch for a single item.
    fn pitch(&self, item: &Item) -> AnirecResult<String>;

    /// Human-readable explainer name.
    fn name(&self) -> &str;

    /// Whether this explainer is currently available.
    fn is_available(&self) -> bool;
}
