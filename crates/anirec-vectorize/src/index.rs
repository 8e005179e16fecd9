//! The immutable similarity index built from one catalog snapshot.

use std::time::Instant;

use anirec_core::config::VectorizerConfig;
use anirec_core::models::{Catalog, IndexStats, Recommendation};
use tracing::{info, warn};

use crate::similarity::SimilarityMatrix;
use crate::tfidf::{TfIdfModel, TfIdfVectorizer};
use crate::title_index::TitleIndex;

/// Term weights, similarity matrix, and title index for a catalog.
///
/// Built once, read-only afterwards. Rebuilding means building a new index
/// from a new catalog snapshot.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    catalog: Catalog,
    model: TfIdfModel,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
}

/// Build an index with the default vectorizer settings.
pub fn build_index(catalog: Catalog) -> SimilarityIndex {
    SimilarityIndex::build(catalog, &VectorizerConfig::default())
}

impl SimilarityIndex {
    /// Vectorize every description, compute all-pairs similarity, and
    /// index titles. An empty catalog yields an empty index.
    pub fn build(catalog: Catalog, config: &VectorizerConfig) -> Self {
        let started = Instant::now();

        let descriptions: Vec<&str> = catalog.descriptions().collect();
        let model = TfIdfVectorizer::new(config).fit_transform(&descriptions);
        let similarity = SimilarityMatrix::from_weights(model.weights());
        let titles = TitleIndex::build(catalog.items());

        if titles.shadowed() > 0 {
            warn!(
                shadowed = titles.shadowed(),
                "duplicate titles in catalog; only first occurrences are addressable"
            );
        }

        info!(
            items = catalog.len(),
            vocabulary = model.vocabulary_size(),
            nnz = model.weights().nnz(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            hash = %catalog.content_hash(),
            "similarity index built"
        );

        Self {
            catalog,
            model,
            similarity,
            titles,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn title_index(&self) -> &TitleIndex {
        &self.titles
    }

    pub fn content_hash(&self) -> &str {
        self.catalog.content_hash()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        let weights = self.model.weights();
        IndexStats {
            items: self.catalog.len(),
            vocabulary_size: self.model.vocabulary_size(),
            non_zero_weights: weights.nnz(),
            empty_descriptions: (0..weights.n_rows())
                .filter(|&r| weights.row_is_zero(r))
                .count(),
            shadowed_titles: self.titles.shadowed(),
            content_hash: self.catalog.content_hash().to_string(),
        }
    }

    /// Rank items against a free-text query by cosine similarity.
    ///
    /// Items with zero similarity are not matches and are left out. Ties keep
    /// catalog order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<Recommendation> {
        let q = self.model.transform(query);
        if q.is_zero() {
            return Vec::new();
        }

        let weights = self.model.weights();
        let mut scored: Vec<(usize, f64)> = (0..weights.n_rows())
            .map(|row| (row, q.dot_row(weights, row).clamp(0.0, 1.0)))
            .filter(|(_, score)| *score > 0.0)
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(top_k);

        scored
            .into_iter()
            .enumerate()
            .filter_map(|(i, (row, score))| {
                let item = self.catalog.get(row)?;
                Some(Recommendation {
                    rank: i + 1,
                    row,
                    title: item.title.clone(),
                    description: item.description.clone(),
                    score,
                    explanation: None,
                })
            })
            .collect()
    }
}
