//! EmbeddingEngine: the entry point for dense-path embedding.
//!
//! Wraps the injected provider with batch validation for index builds and a
//! query cache for search and relevance scoring.

use std::sync::Arc;

use biosearch_core::config::EmbeddingConfig;
use biosearch_core::errors::BiosearchResult;
use biosearch_core::traits::IEmbeddingProvider;
use biosearch_observability::embedding_span;
use tracing::{debug, info};

use crate::batching;
use crate::cache::QueryEmbeddingCache;
use crate::providers;

/// The embedding engine. Shared read-only by every query thread.
pub struct EmbeddingEngine {
    provider: Arc<dyn IEmbeddingProvider>,
    cache: QueryEmbeddingCache,
    batch_size: usize,
    parallel_batches: bool,
}

impl EmbeddingEngine {
    /// Wrap an injected provider.
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        info!(
            provider = provider.name(),
            dims = provider.dimensions(),
            batch_size = config.batch_size,
            parallel = config.parallel_batches,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: QueryEmbeddingCache::new(config.query_cache_size),
            batch_size: config.batch_size.max(1),
            parallel_batches: config.parallel_batches,
        }
    }

    /// Create the configured provider and wrap it.
    pub fn from_config(config: &EmbeddingConfig) -> BiosearchResult<Self> {
        let provider = providers::create_provider(config)?;
        Ok(Self::new(provider, config))
    }

    /// Embed corpus texts in fixed-size batches. Row `i` of the result
    /// belongs to `texts[i]`.
    pub fn embed_corpus(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>> {
        let span = embedding_span!(
            self.provider.name(),
            self.provider.dimensions(),
            texts.len()
        );
        let _guard = span.enter();
        batching::embed_in_batches(
            self.provider.as_ref(),
            texts,
            self.batch_size,
            self.parallel_batches,
        )
    }

    /// Embed one normalized text as a batch of one, through the cache.
    pub fn embed_query(&self, text: &str) -> BiosearchResult<Arc<Vec<f32>>> {
        let key = QueryEmbeddingCache::key(text);
        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %key, "query embedding cache hit");
            return Ok(hit);
        }

        let mut batch = batching::embed_checked(self.provider.as_ref(), &[text.to_string()])?;
        let embedding = Arc::new(batch.pop().unwrap_or_default());
        self.cache.insert(key, Arc::clone(&embedding));
        Ok(embedding)
    }

    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of cached query embeddings.
    pub fn cached_queries(&self) -> u64 {
        self.cache.entry_count()
    }
}
