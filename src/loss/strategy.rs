use serde::{Serialize, Deserialize};

use crate::loss::softmax::SoftmaxLoss;
use crate::math::matrix::Matrix;

/// Selects which softmax-loss implementation a caller runs.
///
/// - `Naive`:      explicit per-sample, per-class loops
/// - `Vectorized`: whole-matrix operations
///
/// Both produce the same loss and gradient up to floating-point rounding;
/// `Vectorized` is the one to use outside of cross-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossStrategy {
    Naive,
    Vectorized,
}

impl LossStrategy {
    /// Computes `(loss, dW)` with the selected implementation.
    pub fn evaluate(&self, w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
        match self {
            LossStrategy::Naive => SoftmaxLoss::loss_naive(w, x, y, reg),
            LossStrategy::Vectorized => SoftmaxLoss::loss_vectorized(w, x, y, reg),
        }
    }
}
