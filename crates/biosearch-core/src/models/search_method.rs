use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BiosearchError;

/// Ranking method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    /// Sparse TF-IDF ranking.
    Lexical,
    /// Dense embedding ranking.
    Dense,
}

impl SearchMethod {
    /// Every supported method, in presentation order.
    pub const ALL: [SearchMethod; 2] = [SearchMethod::Lexical, SearchMethod::Dense];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Dense => "dense",
        }
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMethod {
    type Err = BiosearchError;

    /// Accepts the canonical names plus the legacy `tf-idf` and `bert` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexical" | "tf-idf" | "tfidf" => Ok(Self::Lexical),
            "dense" | "bert" => Ok(Self::Dense),
            _ => Err(BiosearchError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}
