//! TF-IDF term weighting.
//!
//! `weight(d, t) = tf(d, t) * idf(t)` with the smoothed
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, then each row is L2-normalized
//! so the dot product of two rows is their cosine similarity.

use std::collections::{BTreeSet, HashMap};

use anirec_core::config::VectorizerConfig;
use tracing::debug;

use crate::sparse::{CsrMatrix, SparseVector};
use crate::tokenizer::Tokenizer;

/// Fits a vocabulary and IDF vector on a corpus.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
    smooth_idf: bool,
    sublinear_tf: bool,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(&VectorizerConfig::default())
    }
}

/// A fitted vectorizer together with the corpus weight matrix.
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    tokenizer: Tokenizer,
    sublinear_tf: bool,
    /// Term → column. Columns are assigned in lexicographic term order.
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
    weights: CsrMatrix,
}

impl TfIdfVectorizer {
    pub fn new(config: &VectorizerConfig) -> Self {
        Self {
            tokenizer: Tokenizer::from_config(config),
            smooth_idf: config.smooth_idf,
            sublinear_tf: config.sublinear_tf,
        }
    }

    /// Learn the vocabulary and IDF from `documents` and weight every document.
    ///
    /// An empty corpus yields an empty model (zero rows, zero columns).
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfIdfModel {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.tokenizer.tokenize(d.as_ref()))
            .collect();

        let terms: Vec<String> = tokenized
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        // Document frequency per column.
        let mut df = vec![0usize; terms.len()];
        let counts: Vec<HashMap<usize, usize>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf: HashMap<usize, usize> = HashMap::new();
                for token in tokens {
                    if let Some(&col) = vocabulary.get(token) {
                        *tf.entry(col).or_default() += 1;
                    }
                }
                for col in tf.keys() {
                    df[*col] += 1;
                }
                tf
            })
            .collect();

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = df
            .iter()
            .map(|&d| {
                let d = d as f64;
                if self.smooth_idf {
                    ((1.0 + n_docs) / (1.0 + d)).ln() + 1.0
                } else {
                    (n_docs / d).ln() + 1.0
                }
            })
            .collect();

        let rows: Vec<SparseVector> = counts
            .iter()
            .map(|tf| weigh(tf, &idf, self.sublinear_tf))
            .collect();
        let weights = CsrMatrix::from_rows(rows, terms.len());

        debug!(
            documents = documents.len(),
            vocabulary = terms.len(),
            nnz = weights.nnz(),
            "tf-idf fitted"
        );

        TfIdfModel {
            tokenizer: self.tokenizer.clone(),
            sublinear_tf: self.sublinear_tf,
            vocabulary,
            terms,
            idf,
            weights,
        }
    }
}

/// Weight raw counts and L2-normalize.
fn weigh(counts: &HashMap<usize, usize>, idf: &[f64], sublinear_tf: bool) -> SparseVector {
    let pairs = counts
        .iter()
        .map(|(&col, &count)| {
            let tf = if sublinear_tf {
                1.0 + (count as f64).ln()
            } else {
                count as f64
            };
            (col, tf * idf[col])
        })
        .collect();
    let mut row = SparseVector::from_pairs(pairs);
    row.l2_normalize();
    row
}

impl TfIdfModel {
    /// The L2-normalized term-weight matrix, one row per document.
    pub fn weights(&self) -> &CsrMatrix {
        &self.weights
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    /// Column of `term`, if it is in the vocabulary.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Term at column `col`.
    pub fn term(&self, col: usize) -> Option<&str> {
        self.terms.get(col).map(String::as_str)
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.column(term).map(|c| self.idf[c])
    }

    /// Project free text into the fitted space. Out-of-vocabulary terms are
    /// ignored; the result is unit length or all-zero.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in self.tokenizer.tokenize(text) {
            if let Some(&col) = self.vocabulary.get(&token) {
                *counts.entry(col).or_default() += 1;
            }
        }
        weigh(&counts, &self.idf, self.sublinear_tf)
    }

    /// Highest-weighted terms of a document, descending.
    pub fn top_terms(&self, row: usize, limit: usize) -> Vec<(&str, f64)> {
        let (cols, vals) = self.weights.row(row);
        let mut terms: Vec<(&str, f64)> = cols
            .iter()
            .zip(vals)
            .map(|(c, v)| (self.terms[*c].as_str(), *v))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(limit);
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(docs: &[&str]) -> TfIdfModel {
        TfIdfVectorizer::default().fit_transform(docs)
    }

    #[test]
    fn vocabulary_is_sorted_and_stop_words_removed() {
        let m = fit(&["robots fight in space", "romance in school"]);
        assert_eq!(m.vocabulary_size(), 5);
        assert_eq!(m.term(0), Some("fight"));
        assert_eq!(m.term(4), Some("space"));
        assert_eq!(m.column("in"), None);
    }

    #[test]
    fn smoothed_idf_values() {
        let m = fit(&["robots fight", "robots dance", "romance"]);
        // robots: df = 2, n = 3 → ln(4/3) + 1
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((m.idf("robots").unwrap() - expected).abs() < 1e-12);
        // romance: df = 1 → ln(4/2) + 1
        assert!((m.idf("romance").unwrap() - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn rare_terms_weigh_more() {
        let m = fit(&["robots fight", "robots dance", "robots sing"]);
        let w = m.weights();
        let robots = m.column("robots").unwrap();
        let fight = m.column("fight").unwrap();
        assert!(w.get(0, fight) > w.get(0, robots));
    }

    #[test]
    fn rows_are_unit_length_or_zero() {
        let m = fit(&["robots fight in space", "", "the and of"]);
        let w = m.weights();
        let (_, vals) = w.row(0);
        let norm: f64 = vals.iter().map(|v| v * v).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert!(w.row_is_zero(1));
        assert!(w.row_is_zero(2));
    }

    #[test]
    fn term_frequency_counts_repeats() {
        let m = fit(&["mecha mecha pilot", "pilot school"]);
        let w = m.weights();
        let mecha = m.column("mecha").unwrap();
        let pilot = m.column("pilot").unwrap();
        assert!(w.get(0, mecha) > 2.0 * w.get(0, pilot));
    }

    #[test]
    fn sublinear_tf_dampens_repeats() {
        let docs = ["mecha mecha mecha mecha pilot", "pilot school"];
        let plain = fit(&docs);
        let sub = TfIdfVectorizer::new(&VectorizerConfig {
            sublinear_tf: true,
            ..Default::default()
        })
        .fit_transform(&docs);
        let col = plain.column("mecha").unwrap();
        assert!(sub.weights().get(0, col) < plain.weights().get(0, col));
    }

    #[test]
    fn empty_corpus_yields_empty_model() {
        let m = fit(&[]);
        assert_eq!(m.vocabulary_size(), 0);
        assert_eq!(m.weights().n_rows(), 0);
    }

    #[test]
    fn transform_ignores_unknown_terms() {
        let m = fit(&["robots fight in space", "romance in school"]);
        assert!(m.transform("cooking pasta").is_zero());
        let q = m.transform("space robots and cooking");
        assert_eq!(q.nnz(), 2);
        assert!((q.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn top_terms_descending() {
        let m = fit(&["mecha mecha pilot", "pilot school"]);
        let top = m.top_terms(0, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].0, "mecha");
    }
}
