use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
///
/// The provider itself is supplied by the caller; this section only
/// controls what the crate layers on top of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// In-memory embedding cache max entries. 0 disables caching.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}
