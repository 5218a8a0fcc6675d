//! Error handling for exemplar.
//! One error enum per subsystem, `thiserror` only, aggregated into [`ExemplarError`].

pub mod config_error;
pub mod embedding_error;
pub mod exemplar_error;
pub mod ranking_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use exemplar_error::{ExemplarError, ExemplarResult};
pub use ranking_error::RankingError;
