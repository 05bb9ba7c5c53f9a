/// Index cache errors. The engine recovers from all of them by rebuilding.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache artifact {path} is inconsistent with the corpus: {reason}")]
    Inconsistent { path: String, reason: String },

    #[error("cache artifact {path} is corrupt: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("cache I/O failed for {path}: {reason}")]
    Io { path: String, reason: String },
}
