use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "onnx" or "hashing".
    pub provider: String,
    /// Directory holding `model.onnx` and the tokenizer files.
    pub model_dir: Option<String>,
    /// Embedding dimensions produced by the provider.
    pub dimensions: usize,
    /// Number of texts per embedding call during index build.
    pub batch_size: usize,
    /// Run build batches on the rayon pool.
    pub parallel_batches: bool,
    /// Max entries in the query embedding cache.
    pub query_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model_dir: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            parallel_batches: defaults::DEFAULT_PARALLEL_BATCHES,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
