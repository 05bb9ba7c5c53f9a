//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

use biosearch_core::models::SearchMethod;

/// Log a finished search.
pub fn search_completed(method: SearchMethod, top_n: usize, hits: usize, elapsed_ms: f64) {
    tracing::info!(
        event = "search_completed",
        method = %method,
        top_n = top_n,
        hits = hits,
        elapsed_ms = elapsed_ms,
        "search completed"
    );
}

/// Log a finished index build.
pub fn indexes_built(documents: usize, vocabulary: usize, dims: usize, elapsed_ms: f64) {
    tracing::info!(
        event = "indexes_built",
        documents = documents,
        vocabulary = vocabulary,
        dims = dims,
        elapsed_ms = elapsed_ms,
        "indexes built"
    );
}

/// Log a successful cache restore.
pub fn cache_restored(documents: usize) {
    tracing::info!(
        event = "cache_restored",
        documents = documents,
        "indexes restored from cache"
    );
}

/// Log a discarded cache artifact. The engine rebuilds instead.
pub fn cache_discarded(path: &str, reason: &str) {
    tracing::warn!(
        event = "cache_discarded",
        path = %path,
        reason = %reason,
        "cache discarded, rebuilding"
    );
}

/// Log a cache write.
pub fn cache_saved(artifacts: usize, documents: usize) {
    tracing::info!(
        event = "cache_saved",
        artifacts = artifacts,
        documents = documents,
        "indexes persisted"
    );
}
