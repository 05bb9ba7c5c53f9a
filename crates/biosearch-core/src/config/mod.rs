//! Engine configuration, loaded from TOML with per-section defaults and
//! environment overrides for deployment paths.

pub mod corpus_config;
pub mod defaults;
pub mod embedding_config;
pub mod index_config;
pub mod normalizer_config;
pub mod observability_config;
pub mod search_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use index_config::IndexConfig;
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;
pub use search_config::SearchConfig;

use crate::errors::{BiosearchError, BiosearchResult};

/// Environment variables recognised by [`BiosearchConfig::apply_env_overrides`].
pub mod env {
    pub const DATA_PATH: &str = "BIOSEARCH_DATA_PATH";
    pub const LEXICAL_INDEX_PATH: &str = "BIOSEARCH_LEXICAL_INDEX_PATH";
    pub const DENSE_INDEX_PATH: &str = "BIOSEARCH_DENSE_INDEX_PATH";
    pub const CORPUS_CACHE_PATH: &str = "BIOSEARCH_CORPUS_CACHE_PATH";
    pub const EMBEDDING_PROVIDER: &str = "BIOSEARCH_EMBEDDING_PROVIDER";
    pub const MODEL_DIR: &str = "BIOSEARCH_MODEL_DIR";
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BiosearchConfig {
    pub corpus: CorpusConfig,
    pub index: IndexConfig,
    pub normalizer: NormalizerConfig,
    pub embedding: EmbeddingConfig,
    pub search: SearchConfig,
    pub observability: ObservabilityConfig,
}

impl BiosearchConfig {
    /// Parse a TOML document. Missing sections and keys fall back to defaults.
    pub fn from_toml(source: &str) -> BiosearchResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| BiosearchError::ConfigError {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> BiosearchResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| BiosearchError::ConfigError {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_env_overrides(|key| std::env::var(key).ok());
        self
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(env::DATA_PATH) {
            self.corpus.data_path = v;
        }
        if let Some(v) = get(env::LEXICAL_INDEX_PATH) {
            self.index.lexical_index_path = v;
        }
        if let Some(v) = get(env::DENSE_INDEX_PATH) {
            self.index.dense_index_path = v;
        }
        if let Some(v) = get(env::CORPUS_CACHE_PATH) {
            self.index.corpus_cache_path = v;
        }
        if let Some(v) = get(env::EMBEDDING_PROVIDER) {
            self.embedding.provider = v;
        }
        if let Some(v) = get(env::MODEL_DIR) {
            self.embedding.model_dir = Some(v);
        }
    }

    /// Reject values that would make index build meaningless.
    pub fn validate(&self) -> BiosearchResult<()> {
        if self.embedding.batch_size == 0 {
            return Err(BiosearchError::ConfigError {
                reason: "embedding.batch_size must be positive".to_string(),
            });
        }
        if self.embedding.dimensions == 0 {
            return Err(BiosearchError::ConfigError {
                reason: "embedding.dimensions must be positive".to_string(),
            });
        }
        if self.search.default_top_n == 0 {
            return Err(BiosearchError::ConfigError {
                reason: "search.default_top_n must be positive".to_string(),
            });
        }
        Ok(())
    }
}
