//! Span definitions per operation: build, search, embedding, cache I/O.

/// Create an index build span.
#[macro_export]
macro_rules! build_span {
    ($documents:expr) => {
        tracing::info_span!($crate::spans::names::BUILD, documents = $documents)
    };
}

/// Create a search span.
#[macro_export]
macro_rules! search_span {
    ($method:expr, $top_n:expr) => {
        tracing::info_span!($crate::spans::names::SEARCH, method = %$method, top_n = $top_n)
    };
}

/// Create a corpus embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr, $texts:expr) => {
        tracing::info_span!(
            $crate::spans::names::EMBEDDING,
            provider = %$provider,
            dimension = $dimension,
            texts = $texts
        )
    };
}

/// Create a cache I/O span.
#[macro_export]
macro_rules! cache_span {
    ($op:expr, $path:expr) => {
        tracing::info_span!($crate::spans::names::CACHE, op = $op, path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BUILD: &str = "biosearch.build";
    pub const SEARCH: &str = "biosearch.search";
    pub const EMBEDDING: &str = "biosearch.embedding";
    pub const CACHE: &str = "biosearch.cache";
}
