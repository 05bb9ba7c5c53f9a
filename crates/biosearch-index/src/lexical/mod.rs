//! Sparse lexical index.

pub mod sparse;
pub mod tfidf;

use biosearch_core::errors::{BiosearchError, BiosearchResult};
use biosearch_core::models::{Corpus, SearchHit};
use biosearch_text::TextNormalizer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use sparse::CsrMatrix;
pub use tfidf::TfidfVectorizer;

use crate::{check_row_ids, hits, ranking};

/// TF-IDF model plus the document matrix it produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LexicalIndex {
    vectorizer: TfidfVectorizer,
    matrix: CsrMatrix,
    /// Row → document id.
    row_ids: Vec<u64>,
}

impl LexicalIndex {
    /// Fit on the corpus `normalized_lexical` texts.
    pub fn build(corpus: &Corpus) -> Self {
        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&corpus.lexical_texts());
        info!(
            documents = matrix.n_rows(),
            vocabulary = vectorizer.vocabulary_size(),
            nnz = matrix.nnz(),
            "lexical index built"
        );
        Self {
            vectorizer,
            matrix,
            row_ids: corpus.row_ids(),
        }
    }

    /// Validate a restored index against the corpus it will serve.
    pub fn validate(&self, corpus: &Corpus) -> BiosearchResult<()> {
        if !self.vectorizer.is_consistent() || !self.matrix.is_well_formed() {
            return Err(BiosearchError::IndexError {
                reason: "lexical index structure is malformed".to_string(),
            });
        }
        if self.matrix.n_cols != self.vectorizer.vocabulary_size() {
            return Err(BiosearchError::IndexError {
                reason: format!(
                    "lexical matrix has {} columns, vocabulary has {} terms",
                    self.matrix.n_cols,
                    self.vectorizer.vocabulary_size()
                ),
            });
        }
        if self.matrix.n_rows() != self.row_ids.len() {
            return Err(BiosearchError::IndexError {
                reason: "lexical matrix rows do not match its side table".to_string(),
            });
        }
        check_row_ids("lexical", &self.row_ids, corpus)
    }

    /// Dot product of the projected query with every row.
    pub fn score_normalized(&self, normalized_query: &str) -> Vec<f64> {
        let query = self.vectorizer.transform(normalized_query);
        if query.is_empty() {
            debug!("lexical query has no in-vocabulary terms");
        }
        self.matrix.dot_rows(&query)
    }

    /// Normalize the query, score every document and return the top `top_n`.
    pub fn search(
        &self,
        corpus: &Corpus,
        normalizer: &TextNormalizer,
        query: &str,
        top_n: usize,
    ) -> Vec<SearchHit> {
        if top_n == 0 || corpus.is_empty() {
            return Vec::new();
        }
        let scores = self.score_normalized(&normalizer.normalize_lexical(query));
        hits::resolve(corpus, ranking::top_n(&scores, top_n))
    }

    pub fn rows(&self) -> usize {
        self.matrix.n_rows()
    }

    pub fn row_ids(&self) -> &[u64] {
        &self.row_ids
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn matrix(&self) -> &CsrMatrix {
        &self.matrix
    }
}
