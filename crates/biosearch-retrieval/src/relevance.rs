//! Query/response similarity on the dense path.

use biosearch_core::errors::BiosearchResult;
use biosearch_embeddings::similarity::cosine_similarity;
use biosearch_embeddings::EmbeddingEngine;
use biosearch_text::TextNormalizer;

/// Raw cosine similarity between a query and a response text.
///
/// Both sides go through `normalize_dense` and are embedded as batches of
/// one. No rescaling: the score is comparable across calls.
pub struct RelevanceScorer<'a> {
    normalizer: &'a TextNormalizer,
    embeddings: &'a EmbeddingEngine,
}

impl<'a> RelevanceScorer<'a> {
    pub fn new(normalizer: &'a TextNormalizer, embeddings: &'a EmbeddingEngine) -> Self {
        Self {
            normalizer,
            embeddings,
        }
    }

    pub fn score(&self, query: &str, response: &str) -> BiosearchResult<f32> {
        let query = self
            .embeddings
            .embed_query(&self.normalizer.normalize_dense(query))?;
        let response = self
            .embeddings
            .embed_query(&self.normalizer.normalize_dense(response))?;
        Ok(cosine_similarity(&query, &response))
    }
}
