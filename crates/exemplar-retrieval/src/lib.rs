//! # exemplar-retrieval
//!
//! Ranks indexed passages against a query with an exemplar SVM: a linear
//! separator fitted per query with the query as the only positive example
//! and every passage as a negative one. Distance from the hyperplane orders
//! the passages.
//!
//! Pipeline: query → embed → [`RankingEngine::rank`] → skip the query row →
//! top-k → optional relevancy cutoff → [`RetrievedPassage`]s.
//!
//! [`RetrievedPassage`]: exemplar_core::models::RetrievedPassage

pub mod classifier;
pub mod ranking;
pub mod retriever;

pub use classifier::{FitReport, FittedSvc, LinearSvc};
pub use ranking::{RankingEngine, RankingResult};
pub use retriever::SvmRetriever;
