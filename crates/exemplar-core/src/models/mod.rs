mod passage;
mod retrieved_passage;

pub use passage::{Metadata, Passage};
pub use retrieved_passage::{RetrievedPassage, ScoredPassage};
