use serde::{Deserialize, Serialize};

/// One row of the corpus source, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Explicit id from the source, if it has an id column.
    pub id: Option<u64>,
    pub person: String,
    pub category: String,
    pub text: String,
    pub link: String,
}

/// An immutable corpus document with its derived normalized forms.
///
/// The normalized fields are computed once during preprocessing and never
/// patched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable id, used by collaborators as an opaque join key.
    pub id: u64,
    pub person: String,
    pub category: String,
    /// Raw biography text.
    pub text: String,
    /// Source URL.
    pub link: String,
    /// Text prepared for the TF-IDF model.
    pub normalized_lexical: String,
    /// Text prepared for the embedding model.
    pub normalized_dense: String,
}
