use serde::{Deserialize, Serialize};

use super::{defaults, ClassifierConfig};

/// Retriever configuration. Each retriever owns its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum number of passages returned per query.
    pub k: usize,
    /// Minimum normalized score a passage needs to be returned (inclusive).
    /// Any finite value is allowed: scores lie in `[0, 1)`, so a value at or
    /// above 1 returns nothing and a negative value filters nothing.
    pub relevancy_threshold: Option<f64>,
    /// Worker threads used to embed passages at construction. 0 = available parallelism.
    pub index_threads: usize,
    /// Separator hyperparameters.
    pub classifier: ClassifierConfig,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            k: defaults::DEFAULT_K,
            relevancy_threshold: None,
            index_threads: defaults::DEFAULT_INDEX_THREADS,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl RetrievalConfig {
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_relevancy_threshold(mut self, threshold: Option<f64>) -> Self {
        self.relevancy_threshold = threshold;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }
}
