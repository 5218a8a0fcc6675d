use serde::{Deserialize, Serialize};

use super::{Metadata, Passage};

/// A passage selected into a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPassage {
    pub page_content: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl From<&Passage> for RetrievedPassage {
    fn from(passage: &Passage) -> Self {
        Self {
            page_content: passage.text.clone(),
            metadata: passage.metadata.clone(),
        }
    }
}

/// A retrieved passage together with its normalized relevance score in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPassage {
    pub passage: RetrievedPassage,
    pub score: f64,
}
