use serde::{Deserialize, Serialize};

use super::defaults;

/// Text normalizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Snowball stemmer language: "russian", "english", or "none".
    pub stemmer_language: String,
    /// Extra stop words appended to the built-in Russian list.
    pub extra_stop_words: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            stemmer_language: defaults::DEFAULT_STEMMER_LANGUAGE.to_string(),
            extra_stop_words: Vec::new(),
        }
    }
}
