//! Span definitions per operation: index build, ranking, retrieval.

/// Create an index build span.
#[macro_export]
macro_rules! index_build_span {
    ($provider:expr, $passages:expr) => {
        tracing::info_span!("exemplar.index_build", provider = %$provider, passages = $passages)
    };
}

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($rows:expr, $dimensions:expr) => {
        tracing::debug_span!("exemplar.ranking", rows = $rows, dimensions = $dimensions)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($query:expr, $k:expr) => {
        tracing::info_span!("exemplar.retrieval", query = %$query, k = $k)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INDEX_BUILD: &str = "exemplar.index_build";
    pub const RANKING: &str = "exemplar.ranking";
    pub const RETRIEVAL: &str = "exemplar.retrieval";
}
