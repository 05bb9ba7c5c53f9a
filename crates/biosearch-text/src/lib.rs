//! # biosearch-text
//!
//! Text normalization shared by both ranking paths.
//!
//! - `normalize_lexical`: lowercase, strip punctuation and digits, drop stop
//!   words, lemmatize, join with single spaces.
//! - `normalize_dense`: lowercase, strip punctuation and digits, collapse
//!   whitespace.
//!
//! Both are pure and idempotent. [`preprocess`] runs them once over a whole
//! corpus source.

pub mod lemmatizer;
pub mod normalizer;
pub mod preprocess;
pub mod stopwords;

pub use lemmatizer::{lemmatizer_for_language, IdentityLemmatizer, SnowballLemmatizer};
pub use normalizer::TextNormalizer;
pub use preprocess::preprocess;
