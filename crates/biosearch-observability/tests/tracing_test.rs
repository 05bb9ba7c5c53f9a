use biosearch_core::config::ObservabilityConfig;
use biosearch_core::models::SearchMethod;
use biosearch_observability::spans::names;
use biosearch_observability::{
    build_span, cache_span, embedding_span, events, init_tracing, search_span,
};

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    assert!(tracing::dispatcher::has_been_set());

    init_tracing(&config);
    init_tracing(&ObservabilityConfig {
        log_level: "trace".into(),
        json: true,
    });
    assert!(tracing::dispatcher::has_been_set());
}

#[test]
fn spans_use_named_constants() {
    let span = search_span!(SearchMethod::Dense, 3);
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::SEARCH));
    let span = build_span!(2usize);
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::BUILD));
    let span = embedding_span!("hashing", 256usize, 4usize);
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::EMBEDDING));
    let span = cache_span!("load", "indexes/dense_index.bsx");
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::CACHE));
}

#[test]
fn spans_and_events_are_usable_after_init() {
    init_tracing(&ObservabilityConfig::default());

    let span = search_span!(SearchMethod::Lexical, 5);
    let _guard = span.enter();
    events::search_completed(SearchMethod::Lexical, 5, 3, 0.4);

    let _build = build_span!(10usize).entered();
    events::indexes_built(10, 42, 256, 12.5);

    let _cache = cache_span!("save", "indexes/tfidf_index.bsx").entered();
    events::cache_saved(3, 10);
}

#[test]
fn span_names_share_prefix() {
    for name in [names::BUILD, names::SEARCH, names::EMBEDDING, names::CACHE] {
        assert!(name.starts_with("biosearch."));
    }
}
