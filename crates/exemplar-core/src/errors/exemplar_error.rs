use super::{ConfigError, EmbeddingError, RankingError};

/// Top-level error for every exemplar operation.
///
/// Subsystem errors convert into it with `?`. Errors raised by an external
/// embedding provider are already `ExemplarError`s and pass through as-is.
#[derive(Debug, thiserror::Error)]
pub enum ExemplarError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("ranking error: {0}")]
    RankingError(#[from] RankingError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("passage count {passages} does not match index rows {rows}")]
    IndexMismatch { passages: usize, rows: usize },
}

/// Convenience alias used across the workspace.
pub type ExemplarResult<T> = Result<T, ExemplarError>;
