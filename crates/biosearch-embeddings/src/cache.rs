//! Query embedding cache using moka.
//!
//! Repeated queries (and relevance scoring of the same query against several
//! hits) skip the model call. Keys are blake3 hashes of the normalized text.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

/// In-memory query embedding cache.
pub struct QueryEmbeddingCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl QueryEmbeddingCache {
    /// Create a cache holding at most `max_entries` embeddings.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600)) // 1 hour idle TTL
            .build();

        Self { cache }
    }

    /// Cache key for a normalized text.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Arc<Vec<f32>>) {
        self.cache.insert(key, embedding);
    }

    /// Number of entries currently in the cache (eventually consistent).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = QueryEmbeddingCache::new(100);
        let key = QueryEmbeddingCache::key("мария");
        let vec = Arc::new(vec![1.0, 2.0, 3.0]);
        cache.insert(key.clone(), vec.clone());
        assert_eq!(cache.get(&key), Some(vec));
    }

    #[test]
    fn miss_returns_none() {
        let cache = QueryEmbeddingCache::new(100);
        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn keys_differ_per_text() {
        assert_ne!(QueryEmbeddingCache::key("a"), QueryEmbeddingCache::key("b"));
        assert_eq!(QueryEmbeddingCache::key("a"), QueryEmbeddingCache::key("a"));
    }
}
