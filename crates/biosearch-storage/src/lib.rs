//! # biosearch-storage
//!
//! Everything that touches disk:
//!
//! - [`corpus_loader`]: reads the CSV corpus source into [`SourceRecord`]s and
//!   fingerprints the rows.
//! - [`cache`]: persists the processed corpus and both indexes as checksummed,
//!   zstd-compressed artifacts, and restores them only when they still match
//!   the source.
//!
//! [`SourceRecord`]: biosearch_core::models::SourceRecord

pub mod cache;
pub mod corpus_loader;
pub mod fingerprint;

pub use cache::{CachedState, IndexCache};
pub use corpus_loader::{load_corpus_source, CorpusSource};
pub use fingerprint::{build_fingerprint, source_fingerprint};
