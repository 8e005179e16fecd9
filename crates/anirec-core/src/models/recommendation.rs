use serde::{Deserialize, Serialize};

/// A single ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the result.
    pub rank: usize,
    /// Catalog row of the recommended item.
    pub row: usize,
    pub title: String,
    pub description: String,
    /// Accumulated similarity to the matched favorites.
    pub score: f64,
    /// Optional generated explanation. `None` when no explainer is
    /// configured or the explainer failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// An ordered recommendation result with provenance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    /// Name of the provider that produced the ranking.
    pub provider: String,
    /// Favorite titles that were not found in the title index.
    #[serde(default)]
    pub unknown_favorites: Vec<String>,
}

impl RecommendationSet {
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Titles in rank order.
    pub fn titles(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|r| r.title.as_str())
            .collect()
    }
}
