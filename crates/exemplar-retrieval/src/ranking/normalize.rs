//! Min-max score normalization.

/// `(s - min) / (max - min + tol)` for every score.
///
/// `tol > 0` keeps the denominator positive when all scores are equal and
/// keeps every result strictly below 1.0.
pub(crate) fn normalize(scores: &[f64], tol: f64) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let denominator = max - min + tol;
    scores.iter().map(|s| (s - min) / denominator).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_into_unit_interval() {
        let n = normalize(&[-2.0, 0.0, 2.0], 1e-6);
        assert_eq!(n[0], 0.0);
        assert!(n[1] > 0.49 && n[1] < 0.51);
        assert!(n[2] < 1.0 && n[2] > 0.999);
    }

    #[test]
    fn equal_scores_do_not_divide_by_zero() {
        let n = normalize(&[0.3, 0.3], 1e-6);
        assert_eq!(n, vec![0.0, 0.0]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(normalize(&[], 1e-6).is_empty());
    }
}
