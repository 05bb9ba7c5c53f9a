//! Fixed-size batch embedding for index builds.
//!
//! Texts are cut into `batch_size` chunks. Chunks either run one after another
//! or fan out over the rayon pool; in both cases the ordered collect puts
//! vector `i` at row `i`.

use biosearch_core::errors::{BiosearchResult, EmbeddingError};
use biosearch_core::traits::IEmbeddingProvider;
use rayon::prelude::*;
use tracing::debug;

/// Embed one chunk and check the provider kept its contract.
pub fn embed_checked(
    provider: &dyn IEmbeddingProvider,
    texts: &[String],
) -> BiosearchResult<Vec<Vec<f32>>> {
    let vectors = provider.embed_batch(texts)?;
    if vectors.len() != texts.len() {
        return Err(EmbeddingError::BatchSizeMismatch {
            sent: texts.len(),
            received: vectors.len(),
        }
        .into());
    }
    let dims = provider.dimensions();
    if let Some(bad) = vectors.iter().find(|v| v.len() != dims) {
        return Err(EmbeddingError::DimensionMismatch {
            expected: dims,
            actual: bad.len(),
        }
        .into());
    }
    Ok(vectors)
}

/// Embed every text in fixed-size batches, preserving input order.
pub fn embed_in_batches(
    provider: &dyn IEmbeddingProvider,
    texts: &[String],
    batch_size: usize,
    parallel: bool,
) -> BiosearchResult<Vec<Vec<f32>>> {
    let batch_size = batch_size.max(1);
    let total_batches = texts.len().div_ceil(batch_size);

    let batches: Vec<Vec<Vec<f32>>> = if parallel {
        texts
            .par_chunks(batch_size)
            .enumerate()
            .map(|(i, chunk)| {
                debug!(batch = i + 1, total_batches, size = chunk.len(), "embedding batch");
                embed_checked(provider, chunk)
            })
            .collect::<BiosearchResult<_>>()?
    } else {
        texts
            .chunks(batch_size)
            .enumerate()
            .map(|(i, chunk)| {
                debug!(batch = i + 1, total_batches, size = chunk.len(), "embedding batch");
                embed_checked(provider, chunk)
            })
            .collect::<BiosearchResult<_>>()?
    };

    Ok(batches.into_iter().flatten().collect())
}
