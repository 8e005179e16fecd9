//! # anirec-vectorize
//!
//! Turns a catalog into a similarity index:
//! descriptions → TF-IDF weights (sparse, L2-normalized rows) →
//! dense item×item cosine similarity, plus a title → row lookup.
//!
//! ## Architecture
//!
//! ```text
//! SimilarityIndex
//! ├── Catalog (items, content hash)
//! ├── TfIdfModel
//! │   ├── Tokenizer (word boundaries, min length, StopWordFilter)
//! │   ├── vocabulary + idf
//! │   └── CsrMatrix (term weights)
//! ├── SimilarityMatrix (W · Wᵀ, rayon row-parallel)
//! └── TitleIndex (first occurrence wins)
//! ```

pub mod index;
pub mod similarity;
pub mod sparse;
pub mod stopwords;
pub mod tfidf;
pub mod title_index;
pub mod tokenizer;

pub use index::{build_index, SimilarityIndex};
pub use similarity::SimilarityMatrix;
pub use sparse::{CsrMatrix, SparseVector};
pub use stopwords::StopWordFilter;
pub use tfidf::{TfIdfModel, TfIdfVectorizer};
pub use title_index::TitleIndex;
pub use tokenizer::Tokenizer;
