//! Dense all-pairs cosine similarity.

use anirec_core::errors::RecommendError;
use rayon::prelude::*;
use tracing::debug;

use crate::sparse::CsrMatrix;

/// Dense, symmetric `n × n` similarity matrix stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// `W · Wᵀ` for a matrix with L2-normalized (or all-zero) rows, clamped
    /// into `[0, 1]`.
    ///
    /// Each output row is accumulated through an inverted column index, in
    /// ascending column order. Cell `(i, j)` and `(j, i)` therefore sum the
    /// same products in the same order and are bitwise equal. Rows are filled
    /// in parallel; each row is written by exactly one task.
    pub fn from_weights(weights: &CsrMatrix) -> Self {
        let n = weights.n_rows();
        if n == 0 {
            return Self::empty();
        }

        let postings = weights.column_postings();
        let mut data = vec![0.0f64; n * n];

        data.par_chunks_mut(n).enumerate().for_each(|(i, out)| {
            let (cols, vals) = weights.row(i);
            for (c, w) in cols.iter().zip(vals) {
                for &(j, w2) in &postings[*c] {
                    out[j] += w * w2;
                }
            }
            for v in out.iter_mut() {
                *v = v.clamp(0.0, 1.0);
            }
        });

        debug!(items = n, cells = n * n, "similarity matrix built");
        Self { n, data }
    }

    /// Wrap an externally computed matrix. Rows must form a square matrix
    /// of finite values; finite values are used as given.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, RecommendError> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(RecommendError::MatrixShapeMismatch {
                expected: n,
                rows: n,
                cols: bad.len(),
            });
        }
        for (row, values) in rows.iter().enumerate() {
            if let Some(col) = values.iter().position(|v| !v.is_finite()) {
                return Err(RecommendError::NonFiniteSimilarity { row, col });
            }
        }
        Ok(Self {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn empty() -> Self {
        Self {
            n: 0,
            data: Vec::new(),
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarities of item `i` to every item, in row order.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }
}

/// Cosine similarity between two dense vectors.
/// Returns 0.0 for mismatched, empty, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}
