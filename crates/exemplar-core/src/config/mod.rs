//! Configuration for every exemplar subsystem.
//!
//! Each section derives `serde` with `#[serde(default)]`, so a partial TOML
//! document only overrides the keys it names.

pub mod classifier_config;
pub mod defaults;
pub mod embedding_config;
pub mod exemplar_config;
pub mod observability_config;
pub mod retrieval_config;

pub use classifier_config::ClassifierConfig;
pub use embedding_config::EmbeddingConfig;
pub use exemplar_config::{validate_retrieval, ExemplarConfig};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
