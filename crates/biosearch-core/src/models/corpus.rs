use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{CorpusInfo, Document};
use crate::errors::{BiosearchResult, CorpusError};

/// The ordered document sequence every index is aligned to.
///
/// Row `i` of every per-document matrix belongs to `documents()[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    documents: Vec<Document>,
    /// Fingerprint of the source rows this corpus was preprocessed from.
    source_fingerprint: String,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate ids.
    pub fn new(documents: Vec<Document>, source_fingerprint: String) -> BiosearchResult<Self> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id) {
                return Err(CorpusError::DuplicateId { id: doc.id }.into());
            }
        }
        Ok(Self {
            documents,
            source_fingerprint,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Document at a matrix row.
    pub fn get(&self, row: usize) -> Option<&Document> {
        self.documents.get(row)
    }

    /// Row → document id side table.
    pub fn row_ids(&self) -> Vec<u64> {
        self.documents.iter().map(|d| d.id).collect()
    }

    /// Matrix row of a document id.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.documents.iter().position(|d| d.id == id)
    }

    pub fn source_fingerprint(&self) -> &str {
        &self.source_fingerprint
    }

    /// `normalized_lexical` of every document, in row order.
    pub fn lexical_texts(&self) -> Vec<&str> {
        self.documents
            .iter()
            .map(|d| d.normalized_lexical.as_str())
            .collect()
    }

    /// `normalized_dense` of every document, in row order.
    pub fn dense_texts(&self) -> Vec<String> {
        self.documents
            .iter()
            .map(|d| d.normalized_dense.clone())
            .collect()
    }

    /// Aggregate whitespace token counts over the normalized text.
    pub fn info(&self) -> CorpusInfo {
        CorpusInfo {
            document_count: self.documents.len(),
            lexical_token_count: self
                .documents
                .iter()
                .map(|d| d.normalized_lexical.split_whitespace().count())
                .sum(),
            dense_token_count: self
                .documents
                .iter()
                .map(|d| d.normalized_dense.split_whitespace().count())
                .sum(),
        }
    }
}
