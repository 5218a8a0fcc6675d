//! SvmRetriever: implements IRetriever on top of the ranking engine.
//!
//! Construction embeds every passage once. Each query embeds the query
//! text, ranks the whole index, drops the query row, keeps the next `k`
//! rows and applies the optional relevancy cutoff.

use std::sync::Arc;

use exemplar_core::config::{validate_retrieval, RetrievalConfig};
use exemplar_core::errors::{ExemplarError, ExemplarResult};
use exemplar_core::models::{Passage, RetrievedPassage, ScoredPassage};
use exemplar_core::traits::{IEmbeddingProvider, IRetriever, RetrieverCapabilities};
use exemplar_embeddings::{EmbeddingIndex, IndexBuilder};
use exemplar_observability::retrieval_span;
use tracing::{debug, info};

use crate::ranking::RankingEngine;

/// Exemplar-SVM retriever over a fixed set of passages.
///
/// The index is immutable once built and every query allocates its own
/// solver state, so one retriever can serve queries from many threads.
pub struct SvmRetriever {
    embedder: Arc<dyn IEmbeddingProvider>,
    index: EmbeddingIndex,
    passages: Vec<Passage>,
    engine: RankingEngine,
    config: RetrievalConfig,
}

impl SvmRetriever {
    /// Embed `texts` and build a retriever over them.
    ///
    /// # Errors
    /// Invalid config, or the first embedding error (unchanged).
    pub fn from_texts<I, S>(
        texts: I,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: RetrievalConfig,
    ) -> ExemplarResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_passages(Passage::from_texts(texts), embedder, config)
    }

    /// Embed passages carrying metadata. Positions are reassigned to match
    /// input order.
    pub fn from_passages(
        passages: Vec<Passage>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: RetrievalConfig,
    ) -> ExemplarResult<Self> {
        validate_retrieval(&config)?;

        let passages: Vec<Passage> = passages
            .into_iter()
            .enumerate()
            .map(|(position, mut p)| {
                p.position = position;
                p
            })
            .collect();

        let texts: Vec<&str> = passages.iter().map(|p| p.text.as_str()).collect();
        let index = IndexBuilder::new()
            .with_threads(config.index_threads)
            .build(&texts, embedder.as_ref())?;

        Self::from_index(index, passages, embedder, config)
    }

    /// Wrap an index built elsewhere. Row `i` must embed `passages[i]`.
    ///
    /// # Errors
    /// `IndexMismatch` when row and passage counts differ.
    pub fn from_index(
        index: EmbeddingIndex,
        passages: Vec<Passage>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: RetrievalConfig,
    ) -> ExemplarResult<Self> {
        validate_retrieval(&config)?;
        if index.len() != passages.len() {
            return Err(ExemplarError::IndexMismatch {
                passages: passages.len(),
                rows: index.len(),
            });
        }

        info!(
            provider = embedder.name(),
            passages = passages.len(),
            dims = index.dimensions().unwrap_or(0),
            k = config.k,
            relevancy_threshold = ?config.relevancy_threshold,
            "SvmRetriever initialized"
        );

        Ok(Self {
            embedder,
            index,
            passages,
            engine: RankingEngine::new(config.classifier.clone()),
            config,
        })
    }

    /// Like [`IRetriever::get_relevant_documents`], with each passage's
    /// normalized score.
    ///
    /// # Errors
    /// Embedding errors pass through unchanged. An empty index is
    /// `RankingError::EmptyIndex`.
    pub fn get_relevant_documents_with_scores(
        &self,
        query: &str,
    ) -> ExemplarResult<Vec<ScoredPassage>> {
        let span = retrieval_span!(query, self.config.k);
        let _guard = span.enter();

        let query_vector = self.embedder.embed(query)?;
        let ranking = self.engine.rank(&query_vector, &self.index)?;

        // sorted_ix[0] is always the query row.
        let results: Vec<ScoredPassage> = ranking
            .sorted_ix
            .iter()
            .skip(1)
            .take(self.config.k)
            .map(|&row| (row, ranking.normalized[row]))
            .filter(|&(_, score)| self.passes_threshold(score))
            .map(|(row, score)| ScoredPassage {
                passage: RetrievedPassage::from(&self.passages[row - 1]),
                score,
            })
            .collect();

        debug!(
            returned = results.len(),
            converged = ranking.report.converged,
            "retrieval complete"
        );
        Ok(results)
    }

    fn passes_threshold(&self, score: f64) -> bool {
        self.config
            .relevancy_threshold
            .map_or(true, |threshold| score >= threshold)
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    pub fn index(&self) -> &EmbeddingIndex {
        &self.index
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

impl IRetriever for SvmRetriever {
    fn get_relevant_documents(&self, query: &str) -> ExemplarResult<Vec<RetrievedPassage>> {
        Ok(self
            .get_relevant_documents_with_scores(query)?
            .into_iter()
            .map(|scored| scored.passage)
            .collect())
    }

    fn capabilities(&self) -> RetrieverCapabilities {
        RetrieverCapabilities {
            asynchronous: false,
            incremental: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exemplar_core::errors::RankingError;
    use test_fixtures::TopicEmbedder;

    fn topic() -> Arc<dyn IEmbeddingProvider> {
        Arc::new(TopicEmbedder::new())
    }

    fn texts(results: &[RetrievedPassage]) -> Vec<&str> {
        results.iter().map(|r| r.page_content.as_str()).collect()
    }

    #[test]
    fn related_passage_outranks_unrelated_one() {
        let retriever = SvmRetriever::from_texts(
            ["dog", "car engine repair"],
            topic(),
            RetrievalConfig::default(),
        )
        .unwrap();
        let results = retriever.get_relevant_documents("cat").unwrap();
        assert_eq!(texts(&results), vec!["dog", "car engine repair"]);
    }

    #[test]
    fn k_truncates_results() {
        let retriever = SvmRetriever::from_texts(
            ["cat", "dog", "car engine repair", "pasta recipe"],
            topic(),
            RetrievalConfig::default().with_k(2),
        )
        .unwrap();
        assert_eq!(retriever.get_relevant_documents("kitten").unwrap().len(), 2);
    }

    #[test]
    fn threshold_is_inclusive_and_order_is_kept() {
        let retriever = SvmRetriever::from_texts(
            ["dog", "car engine repair"],
            topic(),
            RetrievalConfig::default(),
        )
        .unwrap();
        let scored = retriever.get_relevant_documents_with_scores("cat").unwrap();
        let dog_score = scored[0].score;

        let filtered = SvmRetriever::from_texts(
            ["dog", "car engine repair"],
            topic(),
            RetrievalConfig::default().with_relevancy_threshold(Some(dog_score)),
        )
        .unwrap()
        .get_relevant_documents("cat")
        .unwrap();
        assert_eq!(texts(&filtered), vec!["dog"]);
    }

    #[test]
    fn empty_retriever_reports_empty_index() {
        let retriever =
            SvmRetriever::from_texts(Vec::<String>::new(), topic(), RetrievalConfig::default())
                .unwrap();
        assert!(retriever.is_empty());
        let err = retriever.get_relevant_documents("cat").unwrap_err();
        assert!(matches!(
            err,
            ExemplarError::RankingError(RankingError::EmptyIndex)
        ));
    }

    #[test]
    fn from_index_checks_row_count() {
        let index = EmbeddingIndex::from_rows(vec![vec![1.0; 8]]).unwrap();
        let passages = Passage::from_texts(["a", "b"]);
        let err = SvmRetriever::from_index(index, passages, topic(), RetrievalConfig::default())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ExemplarError::IndexMismatch {
                passages: 2,
                rows: 1
            }
        ));
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let err = SvmRetriever::from_texts(["cat"], topic(), RetrievalConfig::default().with_k(0))
            .err()
            .unwrap();
        assert!(matches!(err, ExemplarError::ConfigError(_)));
    }

    #[test]
    fn retrieval_is_synchronous_only() {
        let retriever =
            SvmRetriever::from_texts(["cat"], topic(), RetrievalConfig::default()).unwrap();
        let caps = retriever.capabilities();
        assert!(!caps.asynchronous);
        assert!(!caps.incremental);
    }
}
