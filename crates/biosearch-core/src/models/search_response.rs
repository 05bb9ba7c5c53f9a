use serde::{Deserialize, Serialize};

use super::{SearchHit, SearchMethod};

/// Ranked hits for one query plus the wall-clock time spent producing them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub method: SearchMethod,
    pub hits: Vec<SearchHit>,
    /// Time from dispatch to the last relevance score, in milliseconds.
    pub elapsed_ms: f64,
}
