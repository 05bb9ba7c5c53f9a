/// Corpus source errors. Always fatal at engine construction.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus source not found: {path}")]
    NotFound { path: String },

    #[error("malformed corpus source {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("duplicate document id {id} in corpus source")]
    DuplicateId { id: u64 },
}
