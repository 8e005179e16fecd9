//! Recommendation providers.
//!
//! Priority order in the default chain:
//! 1. Any externally registered provider (e.g. a semantic similarity matrix)
//! 2. TF-IDF (always available)

pub mod matrix_provider;
pub mod tfidf_provider;

pub use matrix_provider::MatrixProvider;
pub use tfidf_provider::TfIdfProvider;

use std::sync::Arc;

use anirec_vectorize::SimilarityIndex;
use tracing::info;

use crate::degradation::DegradationChain;

/// Build the default chain over `index`: TF-IDF only.
pub fn default_chain(index: Arc<SimilarityIndex>) -> DegradationChain {
    let mut chain = DegradationChain::new();
    chain.push(Box::new(TfIdfProvider::new(index)));
    info!(provider = chain.active_provider_name(), "recommendation chain ready");
    chain
}
