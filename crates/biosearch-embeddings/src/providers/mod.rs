//! Provider registry.
//!
//! - `onnx`: local transformer through fastembed (requires the `onnx` feature)
//! - `hashing`: deterministic feature hashing, always available

#[cfg(feature = "onnx")]
pub mod fastembed_provider;
pub mod hashing_provider;

#[cfg(feature = "onnx")]
pub use fastembed_provider::FastEmbedProvider;
pub use hashing_provider::HashingProvider;

use std::sync::Arc;

use biosearch_core::config::EmbeddingConfig;
use biosearch_core::errors::{BiosearchError, BiosearchResult, EmbeddingError};
use biosearch_core::traits::IEmbeddingProvider;
use tracing::info;

/// Create the configured provider.
///
/// There is no silent fallback: a configured model that cannot be loaded is a
/// build-time failure, because indexes built by a different model would not
/// be comparable with query embeddings.
pub fn create_provider(config: &EmbeddingConfig) -> BiosearchResult<Arc<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "onnx" => create_onnx_provider(config),
        "hashing" => {
            info!(provider = "hashing", dims = config.dimensions, "using hashing embedding provider");
            Ok(Arc::new(HashingProvider::new(config.dimensions)))
        }
        other => Err(BiosearchError::ConfigError {
            reason: format!("unknown embedding provider: {other}"),
        }),
    }
}

#[cfg(feature = "onnx")]
fn create_onnx_provider(config: &EmbeddingConfig) -> BiosearchResult<Arc<dyn IEmbeddingProvider>> {
    let dir = config
        .model_dir
        .as_deref()
        .ok_or_else(|| EmbeddingError::ModelLoadFailed {
            path: String::new(),
            reason: "embedding.model_dir is not set".to_string(),
        })?;
    let provider = FastEmbedProvider::load(std::path::Path::new(dir), config.dimensions)?;
    Ok(Arc::new(provider))
}

#[cfg(not(feature = "onnx"))]
fn create_onnx_provider(_config: &EmbeddingConfig) -> BiosearchResult<Arc<dyn IEmbeddingProvider>> {
    Err(EmbeddingError::ProviderUnavailable {
        provider: "onnx (built without the `onnx` feature)".to_string(),
    }
    .into())
}
