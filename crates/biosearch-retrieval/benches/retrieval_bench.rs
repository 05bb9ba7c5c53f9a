use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};

use biosearch_core::config::BiosearchConfig;
use biosearch_core::models::SourceRecord;
use biosearch_embeddings::HashingProvider;
use biosearch_retrieval::RetrievalEngine;

fn records(n: usize) -> Vec<SourceRecord> {
    (0..n)
        .map(|i| SourceRecord {
            id: Some(i as u64 + 1),
            person: format!("Персона {i}"),
            category: ["Наука", "Литература", "Балет"][i % 3].into(),
            text: format!("Биография {i}: родился в городе {} и занимался делом {}", i % 50, i % 7),
            link: format!("https://example.org/{i}"),
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let mut config = BiosearchConfig::default();
    config.index.cache_enabled = false;
    config.embedding.provider = "hashing".into();
    config.embedding.dimensions = 384;
    let engine = RetrievalEngine::from_records(
        config,
        Arc::new(HashingProvider::new(384)),
        records(2_000),
    )
    .unwrap();

    c.bench_function("engine_lexical_top5", |b| {
        b.iter(|| engine.search("родился в городе", "lexical", 5, false).unwrap())
    });

    c.bench_function("engine_dense_top5_with_relevance", |b| {
        b.iter(|| engine.search("родился в городе", "dense", 5, true).unwrap())
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
