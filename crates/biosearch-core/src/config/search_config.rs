use serde::{Deserialize, Serialize};

use super::defaults;

/// Search defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of hits returned when the caller does not specify one.
    pub default_top_n: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
        }
    }
}
