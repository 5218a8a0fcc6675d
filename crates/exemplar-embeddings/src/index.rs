//! The embedding index: one row per passage, in passage order.

use exemplar_core::errors::{EmbeddingError, ExemplarResult};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// Immutable `rows x dimensions` matrix of passage embeddings.
///
/// Row `i` is the embedding of passage `i`. Every row has the same length.
/// An index over zero passages has shape `(0, 0)`; its dimensionality is
/// unknown until something is embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingIndex {
    matrix: Array2<f32>,
}

impl EmbeddingIndex {
    /// Stack embeddings into an index, checking they all share one length.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` naming the first row whose length differs
    /// from row 0.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> ExemplarResult<Self> {
        let Some(first) = rows.first() else {
            return Ok(Self::empty());
        };
        let dims = first.len();
        for row in &rows {
            validate_dimensions(row, dims)?;
        }

        let n = rows.len();
        let flat: Vec<f32> = rows.into_iter().flatten().collect();
        let matrix = Array2::from_shape_vec((n, dims), flat).map_err(|e| {
            EmbeddingError::InferenceFailed {
                reason: format!("failed to shape index: {e}"),
            }
        })?;
        Ok(Self { matrix })
    }

    pub fn empty() -> Self {
        Self {
            matrix: Array2::zeros((0, 0)),
        }
    }

    /// Number of indexed passages.
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }

    /// Embedding dimensionality, or `None` for an empty index.
    pub fn dimensions(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.matrix.ncols())
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, f32> {
        self.matrix.row(i)
    }

    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.matrix.view()
    }

    /// Check that a query vector can be ranked against this index.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` when the index is non-empty and the query
    /// length differs from its rows.
    pub fn check_query(&self, query: &[f32]) -> ExemplarResult<()> {
        match self.dimensions() {
            Some(dims) => validate_dimensions(query, dims),
            None => Ok(()),
        }
    }
}

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> ExemplarResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}
