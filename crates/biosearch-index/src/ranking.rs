//! Score ordering shared by both indexes.

use std::cmp::Ordering;

use biosearch_core::constants::DEGENERATE_SCALED_SCORE;
use tracing::debug;

/// Select the `n` best rows: descending score, ties broken by row order.
///
/// Returns `(row, score)` pairs. The sort is stable, so equal scores keep
/// corpus order and an all-zero vector yields rows `0..n`.
pub fn top_n(scores: &[f64], n: usize) -> Vec<(usize, f64)> {
    if n == 0 || scores.is_empty() {
        return Vec::new();
    }
    let mut ranked: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Min-max rescale a similarity vector into `[0, 1]`.
///
/// When `max == min` (one document, or all similarities equal) every score
/// is [`DEGENERATE_SCALED_SCORE`]. Any positive spread is scaled, however
/// small.
pub fn min_max_scale(similarities: &[f32]) -> Vec<f64> {
    let Some(first) = similarities.first() else {
        return Vec::new();
    };
    let (min, max) = similarities
        .iter()
        .fold((*first, *first), |(lo, hi), s| (lo.min(*s), hi.max(*s)));

    if max.partial_cmp(&min) != Some(Ordering::Greater) {
        debug!(
            rows = similarities.len(),
            min = min,
            max = max,
            "degenerate similarity spread, scores set to constant"
        );
        return vec![DEGENERATE_SCALED_SCORE; similarities.len()];
    }

    let min = f64::from(min);
    let spread = f64::from(max) - min;
    similarities
        .iter()
        .map(|s| ((f64::from(*s) - min) / spread).clamp(0.0, 1.0))
        .collect()
}
