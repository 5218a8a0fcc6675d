//! Linear support vector classifier.
//!
//! L2-regularized squared-hinge soft-margin SVM with an intercept, fitted by
//! dual coordinate descent. Classes are weighted `n_samples / (2 * n_class)`
//! so a single positive row is not drowned out by many negatives.

mod dual_cd;

use exemplar_core::config::ClassifierConfig;
use exemplar_core::errors::{ExemplarResult, RankingError};
use ndarray::{Array1, ArrayView1, ArrayView2};

/// How a fit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitReport {
    /// Solver epochs run.
    pub iterations: usize,
    /// `false` when `max_iter` was reached first. The partial solution is
    /// still usable.
    pub converged: bool,
}

/// Unfitted classifier holding its hyperparameters.
#[derive(Debug, Clone)]
pub struct LinearSvc {
    config: ClassifierConfig,
}

/// A fitted separating hyperplane `w·x + b`.
#[derive(Debug, Clone)]
pub struct FittedSvc {
    weights: Array1<f64>,
    intercept: f64,
    report: FitReport,
}

impl LinearSvc {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Fit on rows of `x` with labels `y`. Positive labels (`> 0`) form one
    /// class, everything else the other.
    ///
    /// # Errors
    /// `LabelMismatch` when `y` and `x` disagree on row count, `SingleClass`
    /// when either class is empty. Hitting `max_iter` is not an error.
    pub fn fit(&self, x: ArrayView2<'_, f64>, y: &[f64]) -> ExemplarResult<FittedSvc> {
        let n = x.nrows();
        if y.len() != n {
            return Err(RankingError::LabelMismatch {
                rows: n,
                labels: y.len(),
            }
            .into());
        }

        let signs: Vec<f64> = y
            .iter()
            .map(|&label| if label > 0.0 { 1.0 } else { -1.0 })
            .collect();
        let positives = signs.iter().filter(|&&s| s > 0.0).count();
        let negatives = n - positives;
        if positives == 0 || negatives == 0 {
            return Err(RankingError::SingleClass {
                positives,
                negatives,
            }
            .into());
        }

        let positive_c = self.config.c * balanced_weight(n, positives);
        let negative_c = self.config.c * balanced_weight(n, negatives);
        let sample_c: Vec<f64> = signs
            .iter()
            .map(|&s| if s > 0.0 { positive_c } else { negative_c })
            .collect();

        let solution = dual_cd::solve(x, &signs, &sample_c, &self.config);
        Ok(FittedSvc {
            weights: solution.weights,
            intercept: solution.bias * self.config.intercept_scaling,
            report: solution.report,
        })
    }
}

impl FittedSvc {
    /// Signed distance-like score for each row; positive side = positive class.
    pub fn decision_function(&self, x: ArrayView2<'_, f64>) -> Array1<f64> {
        x.dot(&self.weights) + self.intercept
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn report(&self) -> FitReport {
        self.report
    }
}

/// `n_samples / (n_classes * n_in_class)` with two classes.
fn balanced_weight(n_samples: usize, n_in_class: usize) -> f64 {
    n_samples as f64 / (2.0 * n_in_class as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exemplar_core::errors::ExemplarError;
    use ndarray::array;

    fn svc() -> LinearSvc {
        LinearSvc::new(ClassifierConfig::default())
    }

    #[test]
    fn separates_a_single_positive_from_negatives() {
        let x = array![[1.0, 0.0], [-1.0, 0.2], [-0.8, -0.3], [-1.2, 0.0]];
        let y = [1.0, 0.0, 0.0, 0.0];
        let model = svc().fit(x.view(), &y).unwrap();
        let scores = model.decision_function(x.view());

        assert!(model.report().converged);
        assert!(scores[0] > scores[1]);
        assert!(scores[0] > scores[2]);
        assert!(scores[0] > scores[3]);
        assert!(model.weights()[0] > 0.0);
    }

    #[test]
    fn matches_hand_solved_dual() {
        // Dual optimum of this 3-point problem, solved by hand:
        // alpha ≈ (0.252, 0.144, 0.128) giving q > dog > car.
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let f = 1.0 / 5f64.sqrt();
        let x = array![
            [s, s, 0.0, 0.0, 0.0],
            [s, 0.0, s, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0 * f, f],
        ];
        let model = svc().fit(x.view(), &[1.0, 0.0, 0.0]).unwrap();
        let scores = model.decision_function(x.view());

        assert!((scores[0] - 0.16).abs() < 0.01, "query score {}", scores[0]);
        assert!((scores[1] + 0.038).abs() < 0.01, "dog score {}", scores[1]);
        assert!((scores[2] + 0.147).abs() < 0.01, "car score {}", scores[2]);
    }

    #[test]
    fn decision_is_weights_dot_row_plus_intercept() {
        let x = array![[1.0, 0.0], [-1.0, 0.2], [-0.8, -0.3]];
        let model = svc().fit(x.view(), &[1.0, 0.0, 0.0]).unwrap();

        let origin = array![[0.0, 0.0]];
        assert_eq!(model.decision_function(origin.view())[0], model.intercept());

        let scores = model.decision_function(x.view());
        for (row, score) in x.rows().into_iter().zip(scores.iter()) {
            let expected = row.dot(&model.weights()) + model.intercept();
            assert!((score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn identical_rows_score_identically() {
        let x = array![[0.3, 0.4], [0.3, 0.4], [-0.5, 0.1]];
        let model = svc().fit(x.view(), &[1.0, 0.0, 0.0]).unwrap();
        let scores = model.decision_function(x.view());
        assert_eq!(scores[0], scores[1]);
    }

    #[test]
    fn iteration_cap_returns_partial_solution() {
        let config = ClassifierConfig {
            max_iter: 1,
            tol: 1e-12,
            ..Default::default()
        };
        let x = array![[1.0, 2.0], [2.0, 1.0], [0.5, 0.5], [3.0, 0.0]];
        let model = LinearSvc::new(config)
            .fit(x.view(), &[1.0, 0.0, 0.0, 0.0])
            .unwrap();
        assert_eq!(model.report().iterations, 1);
        assert!(!model.report().converged);
        assert!(model.decision_function(x.view()).iter().all(|s| s.is_finite()));
    }

    #[test]
    fn single_class_is_rejected() {
        let x = array![[1.0], [2.0]];
        let err = svc().fit(x.view(), &[1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            ExemplarError::RankingError(RankingError::SingleClass {
                positives: 2,
                negatives: 0
            })
        ));
    }

    #[test]
    fn label_count_must_match_rows() {
        let x = array![[1.0], [2.0]];
        assert!(svc().fit(x.view(), &[1.0]).is_err());
    }

    #[test]
    fn balanced_weights_favor_the_minority_class() {
        assert_eq!(balanced_weight(5, 1), 2.5);
        assert_eq!(balanced_weight(5, 4), 0.625);
    }

    #[test]
    fn seed_does_not_change_a_converged_solution() {
        let x = array![[1.0, 0.2], [0.1, 1.0], [-0.4, 0.3], [0.2, -0.9]];
        let y = [1.0, 0.0, 0.0, 0.0];
        let a = LinearSvc::new(ClassifierConfig {
            random_seed: 1,
            ..Default::default()
        })
        .fit(x.view(), &y)
        .unwrap();
        let b = LinearSvc::new(ClassifierConfig {
            random_seed: 99,
            ..Default::default()
        })
        .fit(x.view(), &y)
        .unwrap();
        for (sa, sb) in a
            .decision_function(x.view())
            .iter()
            .zip(b.decision_function(x.view()).iter())
        {
            assert!((sa - sb).abs() < 1e-4);
        }
    }
}
