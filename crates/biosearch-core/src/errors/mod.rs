mod cache_error;
mod corpus_error;
mod embedding_error;

pub use cache_error::CacheError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;

use crate::models::SearchMethod;

/// Top-level error for every biosearch operation.
#[derive(Debug, thiserror::Error)]
pub enum BiosearchError {
    #[error("unsupported search method: {method}")]
    UnsupportedMethod { method: String },

    #[error("corpus error: {0}")]
    CorpusError(#[from] CorpusError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("cache error: {0}")]
    CacheError(#[from] CacheError),

    #[error("index error: {reason}")]
    IndexError { reason: String },

    #[error("{method} search failed for query {query:?}: {source}")]
    QueryFailed {
        method: SearchMethod,
        query: String,
        #[source]
        source: Box<BiosearchError>,
    },

    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl BiosearchError {
    /// Wrap a query-time failure with the method and query that caused it.
    pub fn query_failed(method: SearchMethod, query: &str, source: BiosearchError) -> Self {
        Self::QueryFailed {
            method,
            query: query.to_string(),
            source: Box::new(source),
        }
    }

    /// Whether a caller may reasonably retry the same request.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::EmbeddingError(EmbeddingError::InferenceFailed { .. }) => true,
            Self::EmbeddingError(EmbeddingError::ProviderUnavailable { .. }) => true,
            Self::QueryFailed { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

/// Convenience alias.
pub type BiosearchResult<T> = Result<T, BiosearchError>;
