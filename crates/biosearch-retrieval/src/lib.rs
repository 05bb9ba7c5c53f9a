//! # biosearch-retrieval
//!
//! The orchestrator. [`RetrievalEngine`] loads the corpus source, restores or
//! builds both indexes, and then serves lexical and dense searches plus
//! query/response relevance scoring through `&self`.
//!
//! ```text
//! open(config, provider)
//!   ├── corpus_loader (CSV → source rows + fingerprint)
//!   ├── IndexCache::load ──hit──► Ready
//!   └── miss: preprocess → LexicalIndex::build → DenseIndex::build → save ──► Ready
//! ```

pub mod engine;
pub mod relevance;

pub use engine::RetrievalEngine;
pub use relevance::RelevanceScorer;
