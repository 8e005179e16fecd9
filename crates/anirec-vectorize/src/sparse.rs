//! Compressed sparse row storage for term weights.

use serde::{Deserialize, Serialize};

/// A sparse vector with strictly ascending column indices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
}

impl SparseVector {
    /// Build from `(column, value)` pairs. Pairs are sorted by column;
    /// zero values are dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_by_key(|(c, _)| *c);
        let (indices, values) = pairs.into_iter().filter(|(_, v)| *v != 0.0).unzip();
        Self { indices, values }
    }

    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 norm. All-zero vectors are left untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > f64::EPSILON {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// Dot product with one row of a CSR matrix (merge of two sorted lists).
    pub fn dot_row(&self, matrix: &CsrMatrix, row: usize) -> f64 {
        let (cols, vals) = matrix.row(row);
        let (mut i, mut j, mut acc) = (0usize, 0usize, 0.0f64);
        while i < self.indices.len() && j < cols.len() {
            match self.indices[i].cmp(&cols[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    acc += self.values[i] * vals[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        acc
    }
}

/// Row-major sparse matrix. Column indices within a row are ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsrMatrix {
    n_rows: usize,
    n_cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

impl CsrMatrix {
    /// Assemble from per-row sparse vectors.
    pub fn from_rows(rows: Vec<SparseVector>, n_cols: usize) -> Self {
        let n_rows = rows.len();
        let nnz = rows.iter().map(SparseVector::nnz).sum();
        let mut indptr = Vec::with_capacity(n_rows + 1);
        let mut indices = Vec::with_capacity(nnz);
        let mut data = Vec::with_capacity(nnz);
        indptr.push(0);
        for row in rows {
            indices.extend(row.indices);
            data.extend(row.values);
            indptr.push(indices.len());
        }
        Self {
            n_rows,
            n_cols,
            indptr,
            indices,
            data,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Column indices and values of row `i`.
    pub fn row(&self, i: usize) -> (&[usize], &[f64]) {
        let (start, end) = (self.indptr[i], self.indptr[i + 1]);
        (&self.indices[start..end], &self.data[start..end])
    }

    /// Weight at `(row, col)`, zero when absent.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let (cols, vals) = self.row(row);
        cols.binary_search(&col).map(|k| vals[k]).unwrap_or(0.0)
    }

    pub fn row_is_zero(&self, i: usize) -> bool {
        self.indptr[i] == self.indptr[i + 1]
    }

    /// Densify one row.
    #[cfg(test)]
    pub(crate) fn dense_row(&self, i: usize) -> Vec<f64> {
        let mut out = vec![0.0; self.n_cols];
        let (cols, vals) = self.row(i);
        for (c, v) in cols.iter().zip(vals) {
            out[*c] = *v;
        }
        out
    }

    /// Column-major view: for each column, `(row, value)` in ascending row order.
    pub fn column_postings(&self) -> Vec<Vec<(usize, f64)>> {
        let mut postings: Vec<Vec<(usize, f64)>> = vec![Vec::new(); self.n_cols];
        for r in 0..self.n_rows {
            let (cols, vals) = self.row(r);
            for (c, v) in cols.iter().zip(vals) {
                postings[*c].push((r, *v));
            }
        }
        postings
    }
}
