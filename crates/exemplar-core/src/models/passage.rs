use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form metadata attached to a passage and carried into results.
pub type Metadata = BTreeMap<String, serde_json::Value>;

/// An indexed passage.
///
/// `position` is the passage's place in the input sequence. It equals the
/// passage's row in the index and is the identity used to map ranking
/// results back to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub position: usize,
    pub text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: Metadata,
}

impl Passage {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number the given texts in input order.
    pub fn from_texts<I, S>(texts: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(position, text)| Self::new(position, text))
            .collect()
    }
}
