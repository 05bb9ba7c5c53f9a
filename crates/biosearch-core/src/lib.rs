//! # biosearch-core
//!
//! Foundation crate for the biosearch retrieval engine.
//! Defines documents, corpus, search hits, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BiosearchConfig;
pub use errors::{BiosearchError, BiosearchResult};
pub use models::{Corpus, CorpusInfo, Document, SearchHit, SearchMethod, SourceRecord};
