//! # biosearch-index
//!
//! The two per-document indexes of the retrieval engine.
//!
//! - [`LexicalIndex`]: sorted vocabulary, smoothed IDF, CSR matrix of
//!   L2-normalized TF-IDF rows.
//! - [`DenseIndex`]: row-major embedding matrix, cosine similarity with
//!   min-max rescaling over the full similarity vector.
//!
//! Both carry a row → id side table that must equal the corpus ids, and both
//! rank through [`ranking::top_n`] (descending, ties by corpus order).

pub mod dense;
mod hits;
pub mod lexical;
pub mod ranking;

pub use dense::DenseIndex;
pub use lexical::{CsrMatrix, LexicalIndex, TfidfVectorizer};

use biosearch_core::errors::{BiosearchError, BiosearchResult};
use biosearch_core::models::Corpus;

/// Check that an index side table lines up with the corpus.
pub(crate) fn check_row_ids(kind: &str, row_ids: &[u64], corpus: &Corpus) -> BiosearchResult<()> {
    if row_ids.len() != corpus.len() {
        return Err(BiosearchError::IndexError {
            reason: format!(
                "{kind} index has {} rows, corpus has {} documents",
                row_ids.len(),
                corpus.len()
            ),
        });
    }
    let mismatch = row_ids
        .iter()
        .zip(corpus.documents())
        .position(|(id, doc)| *id != doc.id);
    if let Some(row) = mismatch {
        return Err(BiosearchError::IndexError {
            reason: format!("{kind} index row {row} does not match corpus id"),
        });
    }
    Ok(())
}
