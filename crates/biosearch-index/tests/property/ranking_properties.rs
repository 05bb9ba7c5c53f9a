use biosearch_index::ranking::{min_max_scale, top_n};
use biosearch_index::TfidfVectorizer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn top_n_length_is_min_of_n_and_rows(
        scores in prop::collection::vec(-10.0f64..10.0, 0..50),
        n in 0usize..60,
    ) {
        prop_assert_eq!(top_n(&scores, n).len(), n.min(scores.len()));
    }

    #[test]
    fn top_n_is_non_increasing(scores in prop::collection::vec(-10.0f64..10.0, 0..50)) {
        let ranked = top_n(&scores, scores.len());
        for w in ranked.windows(2) {
            prop_assert!(w[0].1 >= w[1].1);
        }
    }

    #[test]
    fn equal_scores_keep_row_order(
        scores in prop::collection::vec(prop::sample::select(vec![0.0f64, 0.5, 1.0]), 1..40),
    ) {
        let ranked = top_n(&scores, scores.len());
        for w in ranked.windows(2) {
            if w[0].1 == w[1].1 {
                prop_assert!(w[0].0 < w[1].0);
            }
        }
    }

    #[test]
    fn scaled_scores_are_in_unit_interval(sims in prop::collection::vec(-1.0f32..1.0, 0..50)) {
        let scaled = min_max_scale(&sims);
        prop_assert_eq!(scaled.len(), sims.len());
        for s in scaled {
            prop_assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn scaling_preserves_order(sims in prop::collection::vec(-1.0f32..1.0, 2..50)) {
        let scaled = min_max_scale(&sims);
        for i in 0..sims.len() {
            for j in 0..sims.len() {
                if sims[i] < sims[j] {
                    prop_assert!(scaled[i] <= scaled[j]);
                }
            }
        }
    }

    #[test]
    fn tfidf_rows_are_unit_or_zero(
        docs in prop::collection::vec("[a-e]{1,3}( [a-e]{1,3}){0,6}", 1..10),
    ) {
        let refs: Vec<&str> = docs.iter().map(String::as_str).collect();
        let (_, matrix) = TfidfVectorizer::fit_transform(&refs);
        prop_assert_eq!(matrix.n_rows(), docs.len());
        for r in 0..matrix.n_rows() {
            let norm = matrix.row(r).1.iter().map(|w| w * w).sum::<f64>().sqrt();
            prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn scoring_is_deterministic(
        docs in prop::collection::vec("[a-e]{2,3}( [a-e]{2,3}){0,6}", 1..10),
        query in "[a-e]{2,3}( [a-e]{2,3}){0,3}",
    ) {
        let refs: Vec<&str> = docs.iter().map(String::as_str).collect();
        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&refs);
        let q = vectorizer.transform(&query);
        let a = matrix.dot_rows(&q);
        let b = matrix.dot_rows(&q);
        prop_assert_eq!(a, b);
    }
}
