use biosearch_core::traits::IEmbeddingProvider;
use biosearch_embeddings::batching::embed_in_batches;
use biosearch_embeddings::similarity::{cosine_similarity, norm};
use biosearch_embeddings::HashingProvider;
use proptest::prelude::*;

proptest! {
    #[test]
    fn vectors_are_unit_or_zero(text in "\\PC{0,120}", dims in 1usize..512) {
        let v = HashingProvider::new(dims).embed(&text).unwrap();
        prop_assert_eq!(v.len(), dims);
        let n = norm(&v);
        prop_assert!(n == 0.0 || (n - 1.0).abs() < 1e-4);
    }

    #[test]
    fn embedding_is_deterministic(text in "\\PC{0,120}") {
        let p = HashingProvider::new(128);
        prop_assert_eq!(p.embed(&text).unwrap(), p.embed(&text).unwrap());
    }

    #[test]
    fn self_similarity_is_one_or_zero(text in "[а-я ]{0,60}") {
        let v = HashingProvider::new(256).embed(&text).unwrap();
        let s = cosine_similarity(&v, &v);
        prop_assert!(s == 0.0 || (s - 1.0).abs() < 1e-4);
    }

    #[test]
    fn batching_preserves_order(
        texts in prop::collection::vec("[а-я ]{0,30}", 0..40),
        batch_size in 1usize..10,
        parallel in any::<bool>(),
    ) {
        let p = HashingProvider::new(64);
        let batched = embed_in_batches(&p, &texts, batch_size, parallel).unwrap();
        let single: Vec<Vec<f32>> = texts.iter().map(|t| p.embed(t).unwrap()).collect();
        prop_assert_eq!(batched, single);
    }
}
