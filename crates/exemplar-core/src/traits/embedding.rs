use crate::errors::ExemplarResult;

/// Embedding generation provider.
///
/// Implementations must be safe to call concurrently: the index builder
/// invokes `embed` from several worker threads at once.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> ExemplarResult<Vec<f32>>;

    /// Embed a batch of texts, in order.
    fn embed_batch(&self, texts: &[String]) -> ExemplarResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
