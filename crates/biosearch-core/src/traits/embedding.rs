use crate::errors::BiosearchResult;

/// Embedding generation provider.
///
/// Implementations map each input text to one fixed-length vector. The engine
/// shares a single provider across threads, so a provider whose forward pass is
/// not reentrant must serialize calls internally.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> BiosearchResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input in input order.
    fn embed_batch(&self, texts: &[String]) -> BiosearchResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
