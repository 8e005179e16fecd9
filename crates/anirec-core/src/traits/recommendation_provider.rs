use crate::errors::AnirecResult;
use crate::models::Recommendation;

/// A ranking strategy over a fixed catalog.
///
/// Implementations must never return a favorite title and must return at
/// most `top_n` items, most similar first.
pub trait IRecommendationProvider: Send + Sync {
    /// Rank non-favorite items against the given favorite titles.
    fn recommend(&self, favorites: &[String], top_n: usize) -> AnirecResult<Vec<Recommendation>>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
