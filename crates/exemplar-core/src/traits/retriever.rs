use crate::errors::ExemplarResult;
use crate::models::RetrievedPassage;

/// What a retriever supports, so callers can check at integration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrieverCapabilities {
    /// Whether a non-blocking retrieval path exists.
    pub asynchronous: bool,
    /// Whether passages can be added or removed after construction.
    pub incremental: bool,
}

/// Query-time retrieval.
///
/// Retrieval is synchronous only and there is no async method. Callers
/// needing concurrency call from their own threads.
pub trait IRetriever: Send + Sync {
    /// Return the passages most relevant to `query`, best first.
    fn get_relevant_documents(&self, query: &str) -> ExemplarResult<Vec<RetrievedPassage>>;

    fn capabilities(&self) -> RetrieverCapabilities;
}
