use serde::{Deserialize, Serialize};

use super::defaults;

/// Corpus source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the CSV file with `Person`, `Category`, `Text`, `Link` and an
    /// optional `id` column.
    pub data_path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            data_path: defaults::DEFAULT_DATA_PATH.to_string(),
        }
    }
}
