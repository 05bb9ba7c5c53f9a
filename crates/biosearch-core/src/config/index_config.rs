use serde::{Deserialize, Serialize};

use super::defaults;

/// Index cache configuration: where the three artifacts live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Serialized lexical model (vocabulary + IDF + weight matrix).
    pub lexical_index_path: String,
    /// Serialized dense embedding matrix.
    pub dense_index_path: String,
    /// Serialized normalized corpus.
    pub corpus_cache_path: String,
    /// Load and persist artifacts. When false every start rebuilds in memory.
    pub cache_enabled: bool,
    /// zstd level used for artifact bodies.
    pub compression_level: i32,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            lexical_index_path: defaults::DEFAULT_LEXICAL_INDEX_PATH.to_string(),
            dense_index_path: defaults::DEFAULT_DENSE_INDEX_PATH.to_string(),
            corpus_cache_path: defaults::DEFAULT_CORPUS_CACHE_PATH.to_string(),
            cache_enabled: defaults::DEFAULT_CACHE_ENABLED,
            compression_level: defaults::DEFAULT_ZSTD_LEVEL,
        }
    }
}
