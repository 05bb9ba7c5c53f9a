//! Dense embedding index.

use biosearch_core::errors::{BiosearchError, BiosearchResult, EmbeddingError};
use biosearch_core::models::{Corpus, SearchHit};
use biosearch_embeddings::similarity::{cosine_with_norms, norm};
use biosearch_embeddings::EmbeddingEngine;
use biosearch_text::TextNormalizer;
use tracing::info;

use crate::{check_row_ids, hits, ranking};

/// Row-major `rows × dims` embedding matrix in corpus order.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseIndex {
    dims: usize,
    data: Vec<f32>,
    /// Row → document id.
    row_ids: Vec<u64>,
    /// Per-row L2 norms, derived from `data`.
    norms: Vec<f32>,
}

impl DenseIndex {
    /// Assemble an index from a flat matrix, checking its shape.
    pub fn from_parts(dims: usize, data: Vec<f32>, row_ids: Vec<u64>) -> BiosearchResult<Self> {
        if dims == 0 || data.len() != row_ids.len() * dims {
            return Err(BiosearchError::IndexError {
                reason: format!(
                    "dense matrix of {} values does not fit {} rows of {dims} dims",
                    data.len(),
                    row_ids.len()
                ),
            });
        }
        let norms = data.chunks_exact(dims).map(norm).collect();
        Ok(Self {
            dims,
            data,
            row_ids,
            norms,
        })
    }

    /// Embed the corpus `normalized_dense` texts in batches.
    pub fn build(corpus: &Corpus, embeddings: &EmbeddingEngine) -> BiosearchResult<Self> {
        let dims = embeddings.dimensions();
        let rows = embeddings.embed_corpus(&corpus.dense_texts())?;

        let mut data = Vec::with_capacity(rows.len() * dims);
        for row in rows {
            if row.len() != dims {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dims,
                    actual: row.len(),
                }
                .into());
            }
            data.extend_from_slice(&row);
        }

        let index = Self::from_parts(dims, data, corpus.row_ids())?;
        info!(
            documents = index.rows(),
            dims = dims,
            provider = embeddings.provider_name(),
            "dense index built"
        );
        Ok(index)
    }

    /// Validate a restored index against the corpus and the active provider.
    pub fn validate(&self, corpus: &Corpus, expected_dims: usize) -> BiosearchResult<()> {
        if self.dims != expected_dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: expected_dims,
                actual: self.dims,
            }
            .into());
        }
        check_row_ids("dense", &self.row_ids, corpus)
    }

    /// Cosine similarity of a query embedding with every row.
    pub fn similarities(&self, query: &[f32]) -> Vec<f32> {
        let query_norm = norm(query);
        self.data
            .chunks_exact(self.dims)
            .zip(&self.norms)
            .map(|(row, row_norm)| cosine_with_norms(query, query_norm, row, *row_norm))
            .collect()
    }

    /// Min-max scaled similarities over the full corpus.
    pub fn scaled_scores(&self, query: &[f32]) -> Vec<f64> {
        ranking::min_max_scale(&self.similarities(query))
    }

    /// Normalize and embed the query, rescale, then return the top `top_n`.
    pub fn search(
        &self,
        corpus: &Corpus,
        normalizer: &TextNormalizer,
        embeddings: &EmbeddingEngine,
        query: &str,
        top_n: usize,
    ) -> BiosearchResult<Vec<SearchHit>> {
        if top_n == 0 || corpus.is_empty() {
            return Ok(Vec::new());
        }
        let embedding = embeddings.embed_query(&normalizer.normalize_dense(query))?;
        if embedding.len() != self.dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dims,
                actual: embedding.len(),
            }
            .into());
        }
        let scores = self.scaled_scores(&embedding);
        Ok(hits::resolve(corpus, ranking::top_n(&scores, top_n)))
    }

    pub fn rows(&self) -> usize {
        self.row_ids.len()
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn row_ids(&self) -> &[u64] {
        &self.row_ids
    }

    /// The flat row-major matrix.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn row(&self, r: usize) -> Option<&[f32]> {
        self.data.chunks_exact(self.dims).nth(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use biosearch_core::config::EmbeddingConfig;
    use biosearch_core::models::SourceRecord;
    use biosearch_embeddings::HashingProvider;

    fn engine() -> EmbeddingEngine {
        EmbeddingEngine::new(
            Arc::new(HashingProvider::new(256)),
            &EmbeddingConfig {
                provider: "hashing".into(),
                dimensions: 256,
                batch_size: 2,
                ..Default::default()
            },
        )
    }

    fn corpus(texts: &[&str]) -> Corpus {
        let records = texts
            .iter()
            .map(|t| SourceRecord {
                id: None,
                person: "p".into(),
                category: "c".into(),
                text: t.to_string(),
                link: "l".into(),
            })
            .collect();
        biosearch_text::preprocess(records, &TextNormalizer::russian(), "fp".into()).unwrap()
    }

    #[test]
    fn from_parts_rejects_bad_shape() {
        assert!(DenseIndex::from_parts(3, vec![0.0; 5], vec![1, 2]).is_err());
        assert!(DenseIndex::from_parts(0, vec![], vec![]).is_err());
        assert!(DenseIndex::from_parts(2, vec![0.0; 4], vec![1, 2]).is_ok());
    }

    #[test]
    fn zero_rows_have_zero_similarity() {
        let index = DenseIndex::from_parts(2, vec![0.0, 0.0, 1.0, 0.0], vec![1, 2]).unwrap();
        assert_eq!(index.similarities(&[1.0, 0.0]), vec![0.0, 1.0]);
        assert_eq!(index.similarities(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn build_keeps_corpus_order() {
        let c = corpus(&["Мария родилась в Москве", "Иван работал инженером", "Пётр"]);
        let e = engine();
        let index = DenseIndex::build(&c, &e).unwrap();
        assert_eq!(index.rows(), 3);
        assert_eq!(index.row_ids(), &[1, 2, 3]);
        let row = e.embed_query(&c.documents()[1].normalized_dense).unwrap();
        assert_eq!(index.row(1).unwrap(), row.as_slice());
    }

    #[test]
    fn search_ranks_best_match_first_with_unit_score() {
        let c = corpus(&["Мария родилась в Москве", "Иван работал инженером"]);
        let e = engine();
        let index = DenseIndex::build(&c, &e).unwrap();
        let hits = index
            .search(&c, &TextNormalizer::russian(), &e, "Мария", 2)
            .unwrap();
        assert_eq!(hits[0].doc_id, 1);
        assert_eq!(hits[0].score, 1.0);
        assert_eq!(hits[1].score, 0.0);
    }

    #[test]
    fn single_document_is_degenerate() {
        let c = corpus(&["Мария родилась в Москве"]);
        let e = engine();
        let index = DenseIndex::build(&c, &e).unwrap();
        let hits = index
            .search(&c, &TextNormalizer::russian(), &e, "Мария", 5)
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].score, 0.0);
    }

    #[test]
    fn validate_checks_dims_and_ids() {
        let c = corpus(&["Мария родилась", "Иван работал"]);
        let index = DenseIndex::build(&c, &engine()).unwrap();
        assert!(index.validate(&c, 256).is_ok());
        assert!(index.validate(&c, 128).is_err());
        assert!(index.validate(&corpus(&["Мария"]), 256).is_err());
    }

    #[test]
    fn top_n_zero_skips_embedding() {
        let c = corpus(&["Мария родилась"]);
        let e = engine();
        let index = DenseIndex::build(&c, &e).unwrap();
        let cached = e.cached_queries();
        assert!(index
            .search(&c, &TextNormalizer::russian(), &e, "новый запрос", 0)
            .unwrap()
            .is_empty());
        assert_eq!(e.cached_queries(), cached);
    }
}
