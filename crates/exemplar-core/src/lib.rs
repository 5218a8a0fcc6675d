//! # exemplar-core
//!
//! Foundation crate for exemplar retrieval.
//! Defines the shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClassifierConfig, ExemplarConfig, RetrievalConfig};
pub use errors::{ExemplarError, ExemplarResult};
pub use models::{Passage, RetrievedPassage, ScoredPassage};
