//! Parallel index construction.
//!
//! Scatter-gather over a rayon pool: every text is embedded on some worker,
//! and the results are collected by input position, never completion order.

use std::num::NonZeroUsize;
use std::time::Instant;

use exemplar_core::errors::{EmbeddingError, ExemplarResult};
use exemplar_core::traits::IEmbeddingProvider;
use exemplar_observability::index_build_span;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::index::EmbeddingIndex;

/// Builds an [`EmbeddingIndex`] by embedding texts concurrently.
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    /// Worker threads. 0 = available parallelism.
    threads: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed number of worker threads. 0 restores the default.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Worker count actually used for a build.
    pub fn effective_threads(&self) -> usize {
        if self.threads > 0 {
            return self.threads;
        }
        std::thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(1)
    }

    /// Embed every text and stack the results in input order.
    ///
    /// The worker pool lives only for the duration of this call and the
    /// caller blocks until every embedding has finished or one has failed.
    ///
    /// # Errors
    /// The first embedding error is returned unchanged and no index is
    /// produced. Rows of differing length fail with `DimensionMismatch`.
    pub fn build<S>(
        &self,
        texts: &[S],
        embedder: &dyn IEmbeddingProvider,
    ) -> ExemplarResult<EmbeddingIndex>
    where
        S: AsRef<str> + Sync,
    {
        let span = index_build_span!(embedder.name(), texts.len());
        let _guard = span.enter();

        if texts.is_empty() {
            debug!("no passages to embed, returning empty index");
            return Ok(EmbeddingIndex::empty());
        }

        let threads = self.effective_threads().min(texts.len());
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("exemplar-embed-{i}"))
            .build()
            .map_err(|e| EmbeddingError::WorkerPool {
                reason: e.to_string(),
            })?;

        let started = Instant::now();
        let rows: Vec<Vec<f32>> = pool.install(|| {
            texts
                .par_iter()
                .map(|text| embedder.embed(text.as_ref()))
                .collect::<ExemplarResult<Vec<_>>>()
        })?;

        let index = EmbeddingIndex::from_rows(rows)?;
        info!(
            passages = index.len(),
            dims = index.dimensions().unwrap_or(0),
            threads,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "index built"
        );
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{DelayedEmbedder, FailingEmbedder, TopicEmbedder};

    #[test]
    fn rows_follow_input_order_despite_reversed_latency() {
        // Later texts finish first.
        let embedder = DelayedEmbedder::reversed(&["a", "b", "c"], 20);
        let index = IndexBuilder::new()
            .with_threads(3)
            .build(&["a", "b", "c"], &embedder)
            .unwrap();

        assert_eq!(index.len(), 3);
        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(index.row(i).to_vec(), embedder.expected(text));
        }
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let index = IndexBuilder::new()
            .build::<&str>(&[], &TopicEmbedder::new())
            .unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn one_failure_fails_the_whole_build() {
        let embedder = FailingEmbedder::new(4, "bad");
        let err = IndexBuilder::new()
            .build(&["good", "bad", "also good"], &embedder)
            .unwrap_err();
        assert!(err.to_string().contains("bad"));
    }

    #[test]
    fn thread_count_defaults_to_available_parallelism() {
        assert!(IndexBuilder::new().effective_threads() >= 1);
        assert_eq!(IndexBuilder::new().with_threads(2).effective_threads(), 2);
    }
}
