//! TF-IDF provider: ranks with the index's own cosine similarity matrix.

use std::sync::Arc;

use anirec_core::errors::AnirecResult;
use anirec_core::models::Recommendation;
use anirec_core::traits::IRecommendationProvider;
use anirec_vectorize::SimilarityIndex;

use crate::ranking;

pub const TFIDF_PROVIDER_NAME: &str = "tfidf";

/// Deterministic provider over a shared [`SimilarityIndex`]. Always available.
#[derive(Debug, Clone)]
pub struct TfIdfProvider {
    index: Arc<SimilarityIndex>,
}

impl TfIdfProvider {
    pub fn new(index: Arc<SimilarityIndex>) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &Arc<SimilarityIndex> {
        &self.index
    }
}

impl IRecommendationProvider for TfIdfProvider {
    fn recommend(&self, favorites: &[String], top_n: usize) -> AnirecResult<Vec<Recommendation>> {
        Ok(ranking::recommend(favorites, top_n, &self.index))
    }

    fn name(&self) -> &str {
        TFIDF_PROVIDER_NAME
    }

    fn is_available(&self) -> bool {
        true
    }
}
