//! Dual coordinate descent for the L2-regularized squared-hinge SVM.
//!
//! Minimizes `½ αᵀ(Q + D)α − Σα` over `α ≥ 0`, where
//! `Q_ij = y_i y_j (x_i·x_j + s²)` with `s` the intercept scaling and
//! `D_ii = 1 / (2 C_i)`. The primal weights `w = Σ α_i y_i x_i` (and the
//! bias weight on the synthetic feature) are kept in sync after every
//! coordinate step. Coordinates whose projected gradient shows they will
//! stay at the bound are shrunk out of the active set until the next
//! full pass.

use exemplar_core::config::ClassifierConfig;
use exemplar_core::constants::PROJECTED_GRADIENT_EPSILON;
use ndarray::{Array1, ArrayView2};
use tracing::debug;

use super::FitReport;

pub(super) struct DualSolution {
    pub weights: Array1<f64>,
    /// Weight on the synthetic bias feature, before intercept scaling.
    pub bias: f64,
    pub report: FitReport,
}

/// `signs` holds ±1 per row; `sample_c` the class-weighted `C` per row.
pub(super) fn solve(
    x: ArrayView2<'_, f64>,
    signs: &[f64],
    sample_c: &[f64],
    config: &ClassifierConfig,
) -> DualSolution {
    let (n, d) = x.dim();
    let scale = config.intercept_scaling;

    let diag: Vec<f64> = sample_c.iter().map(|c| 0.5 / c).collect();
    let qd: Vec<f64> = (0..n)
        .map(|i| {
            let row = x.row(i);
            row.dot(&row) + scale * scale + diag[i]
        })
        .collect();

    let mut w = Array1::<f64>::zeros(d);
    let mut bias = 0.0;
    let mut alpha = vec![0.0; n];
    let mut index: Vec<usize> = (0..n).collect();
    let mut active = n;
    let mut pg_max_old = f64::INFINITY;
    let mut rng = SplitMix64::new(config.random_seed);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iter {
        let mut pg_max_new = f64::NEG_INFINITY;
        let mut pg_min_new = f64::INFINITY;

        for s in 0..active {
            let j = s + rng.below(active - s);
            index.swap(s, j);
        }

        let mut s = 0;
        while s < active {
            let i = index[s];
            let yi = signs[i];
            let xi = x.row(i);

            let g = yi * (xi.dot(&w) + bias * scale) - 1.0 + alpha[i] * diag[i];

            let mut pg = 0.0;
            if alpha[i] == 0.0 {
                if g > pg_max_old {
                    // Stays at the bound: shrink, then revisit slot `s`.
                    active -= 1;
                    index.swap(s, active);
                    continue;
                } else if g < 0.0 {
                    pg = g;
                }
            } else {
                pg = g;
            }

            pg_max_new = pg_max_new.max(pg);
            pg_min_new = pg_min_new.min(pg);

            if pg.abs() > PROJECTED_GRADIENT_EPSILON {
                let old = alpha[i];
                alpha[i] = (old - g / qd[i]).max(0.0);
                let delta = (alpha[i] - old) * yi;
                w.scaled_add(delta, &xi);
                bias += delta * scale;
            }
            s += 1;
        }

        iterations += 1;

        if pg_max_new - pg_min_new <= config.tol {
            if active == n {
                converged = true;
                break;
            }
            // Shrunk set looks optimal; re-check with every coordinate.
            active = n;
            pg_max_old = f64::INFINITY;
            continue;
        }

        // No upper bound on alpha, so only the lower-bound shrink threshold is tracked.
        pg_max_old = if pg_max_new <= 0.0 { f64::INFINITY } else { pg_max_new };
    }

    if !converged {
        debug!(
            iterations,
            max_iter = config.max_iter,
            "separator hit the iteration cap, using best-effort solution"
        );
    }

    DualSolution {
        weights: w,
        bias,
        report: FitReport {
            iterations,
            converged,
        },
    }
}

/// Small seeded generator for the per-epoch coordinate shuffle.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform-ish value in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}
