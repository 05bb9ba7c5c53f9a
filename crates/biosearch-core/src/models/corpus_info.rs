use serde::{Deserialize, Serialize};

/// Corpus statistics for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusInfo {
    pub document_count: usize,
    pub lexical_token_count: usize,
    pub dense_token_count: usize,
}
