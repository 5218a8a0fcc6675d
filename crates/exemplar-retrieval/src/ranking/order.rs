//! Score ordering and the query-pinning tie-break.

use exemplar_core::constants::QUERY_ROW;

/// Row indices by decreasing score. Equal scores keep ascending row order.
pub(crate) fn argsort_descending(scores: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));
    order
}

/// Put the query row at position 0 with a single swap.
///
/// Rows sorted ahead of the query score at least as high as the query
/// itself (typically a passage identical to it), so exchanging the query
/// with whatever sits at position 0 does not change which passages are
/// returned. Only that one exchange happens; the rows in between keep
/// their places.
pub(crate) fn pin_query_row(order: &mut [usize]) {
    if let Some(pos) = order.iter().position(|&row| row == QUERY_ROW) {
        if pos != 0 {
            order.swap(0, pos);
        }
    }
}
