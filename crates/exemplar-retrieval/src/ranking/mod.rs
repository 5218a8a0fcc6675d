//! RankingEngine: fit → score → order → pin query → normalize.

mod augment;
mod normalize;
mod order;

use exemplar_core::config::ClassifierConfig;
use exemplar_core::constants::QUERY_ROW;
use exemplar_core::errors::{ExemplarResult, RankingError};
use exemplar_embeddings::EmbeddingIndex;
use exemplar_observability::ranking_span;
use tracing::debug;

use crate::classifier::{FitReport, LinearSvc};

/// Outcome of ranking one query against an index.
///
/// Indices refer to rows of the augmented matrix: row 0 is the query and
/// row `r > 0` is passage `r - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    /// Augmented rows by decreasing decision value, query pinned at position 0.
    pub sorted_ix: Vec<usize>,
    /// Normalized scores in `[0, 1)`, aligned to augmented rows (not to `sorted_ix`).
    pub normalized: Vec<f64>,
    /// Raw decision values, aligned to augmented rows.
    pub decision: Vec<f64>,
    pub report: FitReport,
}

impl RankingResult {
    /// Passages best first as `(passage position, normalized score)`,
    /// without the query row.
    pub fn candidates(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.sorted_ix
            .iter()
            .filter(|&&row| row != QUERY_ROW)
            .map(|&row| (row - 1, self.normalized[row]))
    }
}

/// Fits a fresh exemplar separator per call; holds no per-query state.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    classifier: LinearSvc,
}

impl RankingEngine {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: LinearSvc::new(config),
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        self.classifier.config()
    }

    /// Rank every indexed row against `query`.
    ///
    /// # Errors
    /// `EmptyIndex` when there is nothing to separate the query from and
    /// `DimensionMismatch` when the query length differs from the index rows.
    pub fn rank(&self, query: &[f32], index: &EmbeddingIndex) -> ExemplarResult<RankingResult> {
        if index.is_empty() {
            return Err(RankingError::EmptyIndex.into());
        }
        index.check_query(query)?;

        let span = ranking_span!(index.len() + 1, query.len());
        let _guard = span.enter();

        let x = augment::augmented_matrix(query, index.view());
        let y = augment::labels(x.nrows());

        let model = self.classifier.fit(x.view(), &y)?;
        let decision = model.decision_function(x.view()).to_vec();

        let mut sorted_ix = order::argsort_descending(&decision);
        let query_rank = sorted_ix.iter().position(|&row| row == QUERY_ROW);
        order::pin_query_row(&mut sorted_ix);

        let normalized = normalize::normalize(&decision, self.config().tol);

        debug!(
            rows = x.nrows(),
            iterations = model.report().iterations,
            converged = model.report().converged,
            query_rank = ?query_rank,
            "ranking complete"
        );

        Ok(RankingResult {
            sorted_ix,
            normalized,
            decision,
            report: model.report(),
        })
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
