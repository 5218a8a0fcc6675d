use serde::{Deserialize, Serialize};

use super::defaults;

/// Hyperparameters for the per-query linear separator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Inverse regularization strength.
    pub c: f64,
    /// Stopping tolerance; also pads the score normalization denominator.
    pub tol: f64,
    /// Maximum solver epochs before accepting a best-effort solution.
    pub max_iter: usize,
    /// Seed for the per-epoch coordinate permutation.
    pub random_seed: u64,
    /// Value of the synthetic bias feature appended to every row.
    pub intercept_scaling: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            c: defaults::DEFAULT_C,
            tol: defaults::DEFAULT_TOL,
            max_iter: defaults::DEFAULT_MAX_ITER,
            random_seed: defaults::DEFAULT_RANDOM_SEED,
            intercept_scaling: defaults::DEFAULT_INTERCEPT_SCALING,
        }
    }
}
