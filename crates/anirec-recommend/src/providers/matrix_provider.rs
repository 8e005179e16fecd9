//! Provider over an externally computed similarity matrix.
//!
//! Lets a semantic collaborator (embeddings, a hosted model, ...) supply its
//! own item×item scores while reusing the same ranking rules.

use anirec_core::errors::{AnirecResult, RecommendError};
use anirec_core::models::{Catalog, Recommendation};
use anirec_core::traits::IRecommendationProvider;
use anirec_vectorize::{SimilarityMatrix, TitleIndex};

use crate::ranking;

#[derive(Debug, Clone)]
pub struct MatrixProvider {
    name: String,
    catalog: Catalog,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
}

impl MatrixProvider {
    /// Pair `similarity` with the catalog it was computed for. The matrix
    /// must be `n × n` for a catalog of `n` items.
    pub fn new(
        name: impl Into<String>,
        catalog: Catalog,
        similarity: SimilarityMatrix,
    ) -> Result<Self, RecommendError> {
        if similarity.len() != catalog.len() {
            return Err(RecommendError::MatrixShapeMismatch {
                expected: catalog.len(),
                rows: similarity.len(),
                cols: similarity.len(),
            });
        }
        let titles = TitleIndex::build(catalog.items());
        Ok(Self {
            name: name.into(),
            catalog,
            similarity,
            titles,
        })
    }

    /// Build from raw rows. Rows must be square, finite, and match the
    /// catalog size.
    pub fn from_rows(
        name: impl Into<String>,
        catalog: Catalog,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, RecommendError> {
        let similarity = SimilarityMatrix::from_rows(rows)?;
        Self::new(name, catalog, similarity)
    }

    /// Content hash of the catalog this matrix belongs to.
    pub fn content_hash(&self) -> &str {
        self.catalog.content_hash()
    }
}

impl IRecommendationProvider for MatrixProvider {
    fn recommend(&self, favorites: &[String], top_n: usize) -> AnirecResult<Vec<Recommendation>> {
        Ok(ranking::rank(
            favorites,
            top_n,
            &self.similarity,
            &self.titles,
            &self.catalog,
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}
