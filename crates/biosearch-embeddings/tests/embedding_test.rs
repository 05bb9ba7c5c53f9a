//! Failure-mode tests for the embedding path:
//! - Provider returns wrong dimensions → error, not a misaligned matrix
//! - Provider fails mid-build → error surfaces, nothing partial returned
//! - Shared engine under concurrent queries → identical vectors

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use biosearch_core::config::EmbeddingConfig;
use biosearch_core::errors::{BiosearchError, BiosearchResult, EmbeddingError};
use biosearch_core::traits::IEmbeddingProvider;
use biosearch_embeddings::{EmbeddingEngine, HashingProvider};

fn config(batch_size: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: "hashing".into(),
        dimensions: 256,
        batch_size,
        ..Default::default()
    }
}

/// Claims 8 dims, returns 4.
struct WrongDims;

impl IEmbeddingProvider for WrongDims {
    fn embed(&self, _text: &str) -> BiosearchResult<Vec<f32>> {
        Ok(vec![0.0; 4])
    }
    fn embed_batch(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>> {
        Ok(vec![vec![0.0; 4]; texts.len()])
    }
    fn dimensions(&self) -> usize {
        8
    }
    fn name(&self) -> &str {
        "wrong-dims"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Fails on the N-th batch call.
struct FailsOnCall {
    fail_at: usize,
    calls: AtomicUsize,
}

impl IEmbeddingProvider for FailsOnCall {
    fn embed(&self, _text: &str) -> BiosearchResult<Vec<f32>> {
        Ok(vec![1.0])
    }
    fn embed_batch(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == self.fail_at {
            return Err(EmbeddingError::InferenceFailed {
                reason: "resource exhausted".into(),
            }
            .into());
        }
        Ok(vec![vec![1.0]; texts.len()])
    }
    fn dimensions(&self) -> usize {
        1
    }
    fn name(&self) -> &str {
        "fails-on-call"
    }
    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn wrong_dimensions_are_rejected_at_build() {
    let engine = EmbeddingEngine::new(Arc::new(WrongDims), &config(2));
    let err = engine
        .embed_corpus(&["a".to_string(), "b".to_string()])
        .unwrap_err();
    assert!(matches!(
        err,
        BiosearchError::EmbeddingError(EmbeddingError::DimensionMismatch {
            expected: 8,
            actual: 4
        })
    ));
}

#[test]
fn wrong_dimensions_are_rejected_for_queries() {
    let engine = EmbeddingEngine::new(Arc::new(WrongDims), &config(2));
    assert!(engine.embed_query("запрос").is_err());
}

#[test]
fn mid_build_failure_surfaces() {
    let provider = FailsOnCall {
        fail_at: 1,
        calls: AtomicUsize::new(0),
    };
    let engine = EmbeddingEngine::new(Arc::new(provider), &config(2));
    let texts: Vec<String> = (0..6).map(|i| format!("text {i}")).collect();
    let err = engine.embed_corpus(&texts).unwrap_err();
    assert!(err.is_retryable());
}

#[test]
fn failed_query_is_not_cached() {
    let provider = FailsOnCall {
        fail_at: 0,
        calls: AtomicUsize::new(0),
    };
    let engine = EmbeddingEngine::new(Arc::new(provider), &config(2));
    assert!(engine.embed_query("q").is_err());
    // The second call reaches the provider again and succeeds.
    assert_eq!(*engine.embed_query("q").unwrap(), vec![1.0]);
}

#[test]
fn concurrent_queries_share_one_engine() {
    let engine = Arc::new(EmbeddingEngine::new(
        Arc::new(HashingProvider::new(256)),
        &config(32),
    ));
    let expected = engine.embed_query("лев толстой").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.embed_query("лев толстой").unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(*h.join().unwrap(), *expected);
    }
}
