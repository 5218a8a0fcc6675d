//! Per-query training data: the query stacked on top of the index.

use exemplar_core::constants::{NEGATIVE_LABEL, POSITIVE_LABEL, QUERY_ROW};
use ndarray::{Array2, ArrayView2};

/// `[query] ++ rows(index)` as `f64`, so row `r > 0` is passage `r - 1`.
pub(crate) fn augmented_matrix(query: &[f32], index: ArrayView2<'_, f32>) -> Array2<f64> {
    let rows = index.nrows() + 1;
    Array2::from_shape_fn((rows, query.len()), |(r, c)| {
        if r == QUERY_ROW {
            f64::from(query[c])
        } else {
            f64::from(index[[r - 1, c]])
        }
    })
}

/// Positive label for the query row, negative for every passage row.
pub(crate) fn labels(rows: usize) -> Vec<f64> {
    (0..rows)
        .map(|r| if r == QUERY_ROW { POSITIVE_LABEL } else { NEGATIVE_LABEL })
        .collect()
}
