//! # biosearch-embeddings
//!
//! Embedding generation for the dense ranking path.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── IEmbeddingProvider (injected, Arc-shared)
//! │   ├── FastEmbedProvider (feature "onnx", local transformer, CLS pooling)
//! │   └── HashingProvider (deterministic, always available)
//! ├── batching (fixed-size batches, optional rayon fan-out, ordered merge)
//! └── QueryEmbeddingCache (moka, keyed by blake3 of the normalized text)
//! ```

pub mod batching;
pub mod cache;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use cache::QueryEmbeddingCache;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, HashingProvider};
#[cfg(feature = "onnx")]
pub use providers::FastEmbedProvider;
