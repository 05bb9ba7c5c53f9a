//! TF-IDF vectorizer: sorted vocabulary, smoothed IDF, L2-normalized rows.

use std::collections::BTreeMap;

use biosearch_core::constants::MIN_LEXICAL_TERM_CHARS;
use serde::{Deserialize, Serialize};

use super::sparse::CsrMatrix;

/// Whitespace tokens of at least [`MIN_LEXICAL_TERM_CHARS`] characters.
pub fn analyze(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|t| t.chars().count() >= MIN_LEXICAL_TERM_CHARS)
}

/// A fitted vocabulary with its IDF weights.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// term → column. Columns follow lexicographic term order.
    vocabulary: BTreeMap<String, usize>,
    /// IDF per column.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit on the documents and return the vectorizer with the document matrix.
    pub fn fit_transform(documents: &[&str]) -> (Self, CsrMatrix) {
        let counts: Vec<BTreeMap<&str, u32>> = documents.iter().map(|d| term_counts(d)).collect();

        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for row in &counts {
            for term in row.keys() {
                *df.entry(*term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(df.len());
        for (col, (term, freq)) in df.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), col);
            idf.push(((1.0 + n) / (1.0 + freq as f64)).ln() + 1.0);
        }

        let vectorizer = Self { vocabulary, idf };
        let mut matrix = CsrMatrix::new(vectorizer.vocabulary.len());
        for row in &counts {
            matrix.push_row(&vectorizer.weigh(row));
        }
        (vectorizer, matrix)
    }

    /// Project a text into the fitted vocabulary. Unknown terms are ignored.
    pub fn transform(&self, text: &str) -> Vec<(usize, f64)> {
        self.weigh(&term_counts(text))
    }

    /// Count × IDF for known terms, sorted by column, L2-normalized.
    fn weigh(&self, counts: &BTreeMap<&str, u32>) -> Vec<(usize, f64)> {
        // BTreeMap iteration is lexicographic, which is also column order.
        let mut entries: Vec<(usize, f64)> = counts
            .iter()
            .filter_map(|(term, count)| {
                self.vocabulary
                    .get(*term)
                    .map(|col| (*col, f64::from(*count) * self.idf[*col]))
            })
            .collect();

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }
        entries
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Vocabulary columns must be exactly `0..V` in term order.
    pub fn is_consistent(&self) -> bool {
        self.idf.len() == self.vocabulary.len()
            && self.vocabulary.values().enumerate().all(|(i, col)| i == *col)
    }
}

fn term_counts(text: &str) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for term in analyze(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
