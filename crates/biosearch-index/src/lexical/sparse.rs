//! Compressed sparse row matrix of TF-IDF weights.

use serde::{Deserialize, Serialize};

/// CSR matrix. Row `r` owns `indices[indptr[r]..indptr[r + 1]]` and the
/// matching `data` slice; column indices within a row are ascending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CsrMatrix {
    pub n_cols: usize,
    pub indptr: Vec<usize>,
    pub indices: Vec<usize>,
    pub data: Vec<f64>,
}

impl CsrMatrix {
    /// An empty matrix with no rows.
    pub fn new(n_cols: usize) -> Self {
        Self {
            n_cols,
            indptr: vec![0],
            indices: Vec::new(),
            data: Vec::new(),
        }
    }

    /// Append a row of `(column, value)` entries sorted by column.
    pub fn push_row(&mut self, entries: &[(usize, f64)]) {
        for (col, value) in entries {
            self.indices.push(*col);
            self.data.push(*value);
        }
        self.indptr.push(self.indices.len());
    }

    pub fn n_rows(&self) -> usize {
        self.indptr.len().saturating_sub(1)
    }

    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Column indices and values of one row.
    pub fn row(&self, r: usize) -> (&[usize], &[f64]) {
        let (start, end) = (self.indptr[r], self.indptr[r + 1]);
        (&self.indices[start..end], &self.data[start..end])
    }

    /// Dot product of every row with a sparse query vector.
    ///
    /// `query` holds `(column, weight)` pairs sorted by column.
    pub fn dot_rows(&self, query: &[(usize, f64)]) -> Vec<f64> {
        (0..self.n_rows())
            .map(|r| {
                let (cols, vals) = self.row(r);
                sparse_dot(cols, vals, query)
            })
            .collect()
    }

    /// Structural sanity: monotone row pointers, in-range columns.
    pub fn is_well_formed(&self) -> bool {
        self.indptr.first() == Some(&0)
            && self.indptr.windows(2).all(|w| w[0] <= w[1])
            && self.indptr.last() == Some(&self.indices.len())
            && self.indices.len() == self.data.len()
            && self.indices.iter().all(|c| *c < self.n_cols)
    }
}

/// Merge-join dot product of two column-sorted sparse vectors.
fn sparse_dot(cols: &[usize], vals: &[f64], query: &[(usize, f64)]) -> f64 {
    let (mut i, mut j, mut sum) = (0, 0, 0.0);
    while i < cols.len() && j < query.len() {
        match cols[i].cmp(&query[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += vals[i] * query[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
