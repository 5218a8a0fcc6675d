//! In-memory embedding cache in front of any provider.
//!
//! Keys are blake3 content hashes, so equal texts share one entry no matter
//! which passage or query produced them.

use std::sync::Arc;
use std::time::Duration;

use exemplar_core::config::EmbeddingConfig;
use exemplar_core::errors::ExemplarResult;
use exemplar_core::traits::IEmbeddingProvider;
use moka::sync::Cache;
use tracing::{debug, trace};

const IDLE_TTL: Duration = Duration::from_secs(60 * 60);
const ABSOLUTE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Provider wrapper that memoizes embeddings.
///
/// The moka cache is thread-safe, so a `CachedProvider` can sit under the
/// index builder's worker pool. Errors are never cached.
pub struct CachedProvider {
    inner: Arc<dyn IEmbeddingProvider>,
    embeddings: Cache<blake3::Hash, Arc<[f32]>>,
}

impl CachedProvider {
    pub fn new(inner: Arc<dyn IEmbeddingProvider>, max_entries: u64) -> Self {
        let embeddings = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(IDLE_TTL)
            .time_to_live(ABSOLUTE_TTL)
            .build();
        Self { inner, embeddings }
    }

    /// Wrap `inner` according to `config`. A zero `l1_cache_size` returns
    /// `inner` untouched.
    pub fn from_config(
        inner: Arc<dyn IEmbeddingProvider>,
        config: &EmbeddingConfig,
    ) -> Arc<dyn IEmbeddingProvider> {
        if config.l1_cache_size == 0 {
            debug!(provider = inner.name(), "embedding cache disabled");
            return inner;
        }
        debug!(
            provider = inner.name(),
            l1_cache_size = config.l1_cache_size,
            "embedding cache enabled"
        );
        Arc::new(Self::new(inner, config.l1_cache_size))
    }
}

impl IEmbeddingProvider for CachedProvider {
    fn embed(&self, text: &str) -> ExemplarResult<Vec<f32>> {
        let key = blake3::hash(text.as_bytes());
        if let Some(hit) = self.embeddings.get(&key) {
            trace!(hash = %key.to_hex(), "embedding cache hit");
            return Ok(hit.to_vec());
        }
        let embedding = self.inner.embed(text)?;
        self.embeddings.insert(key, Arc::from(embedding.as_slice()));
        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
