use serde::{Deserialize, Serialize};

/// One ranked search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Document id, resolved through the corpus table.
    pub doc_id: u64,
    pub category: String,
    pub text: String,
    pub link: String,
    /// Ranking score. Lexical: TF-IDF dot product. Dense: min-max scaled cosine.
    pub score: f64,
    /// Pairwise query/text cosine, present only when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
}
