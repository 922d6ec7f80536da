use crate::math::matrix::Matrix;

/// Softmax (multinomial logistic regression) loss for a linear classifier.
///
/// Shared conventions of both implementations:
/// - `w` has shape (features, classes), `x` has shape (samples, features),
///   `y` holds one class index per sample in `[0, classes)`.
/// - Scores are shifted by the per-sample maximum before exponentiation.
///   The shift cancels in the normalization, so the probabilities are
///   unchanged, but it keeps `exp()` from overflowing on large scores.
/// - Data loss is the mean per-sample negative log-likelihood
///   `-log(p[y_i])`; the L2 penalty is `reg * sum(w²)` and its gradient
///   contribution is `2 * reg * w` (same convention on both sides).
///
/// Inputs are borrowed read-only; the returned gradient is a fresh
/// allocation with `w`'s shape.
pub struct SoftmaxLoss;

impl SoftmaxLoss {
    /// Explicit-loop implementation: iterates over samples and classes,
    /// accumulating the loss and gradient one sample at a time.
    ///
    /// Returns `(loss, dW)`.
    ///
    /// # Panics
    /// Shape mismatches and out-of-range labels are caller bugs; they
    /// surface as index panics rather than designed errors.
    pub fn loss_naive(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = x.rows;
        let num_classes = w.cols;
        let num_features = w.rows;

        let mut loss = 0.0;
        let mut dw = Matrix::zeros(w.rows, w.cols);

        for i in 0..num_train {
            // scores = X[i] · W
            let mut scores = vec![0.0; num_classes];
            for j in 0..num_classes {
                for k in 0..num_features {
                    scores[j] += x.data[i][k] * w.data[k][j];
                }
            }

            // Shift by the row maximum before exponentiating.
            let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let exps: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
            let exp_sum: f64 = exps.iter().sum();

            loss += -(exps[y[i]] / exp_sum).ln();

            // dW[:, j] += (p_j - 1{j == y_i}) * X[i]
            for j in 0..num_classes {
                let prob = exps[j] / exp_sum;
                let indicator = if j == y[i] { 1.0 } else { 0.0 };
                for k in 0..num_features {
                    dw.data[k][j] += (prob - indicator) * x.data[i][k];
                }
            }
        }

        let n = num_train as f64;
        loss /= n;
        loss += reg * w.sum_squares();

        let dw = dw.map(|g| g / n) + w.map(|v| 2.0 * reg * v);

        (loss, dw)
    }

    /// Whole-matrix implementation: one matrix multiply for all scores,
    /// row-broadcast shift and normalization, then a single
    /// `Xᵀ · (probs - one_hot(y))` multiply for the gradient.
    ///
    /// Numerically equivalent to [`SoftmaxLoss::loss_naive`]; returns
    /// `(loss, dW)`.
    pub fn loss_vectorized(w: &Matrix, x: &Matrix, y: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = x.rows;

        let scores = x.clone() * w.clone();
        let shifted = scores.sub_col_vector(&scores.row_max());
        let exps = shifted.map(f64::exp);
        let mut probs = exps.div_col_vector(&exps.row_sum());

        // Gather each sample's true-class probability for the loss, and
        // fold the one-hot subtraction into the probability matrix in the
        // same pass.
        let mut loss = 0.0;
        for (i, &label) in y.iter().enumerate() {
            loss += -probs.data[i][label].ln();
            probs.data[i][label] -= 1.0;
        }

        let n = num_train as f64;
        loss /= n;
        loss += reg * w.sum_squares();

        let dw = x.transpose() * probs;
        let dw = dw.map(|g| g / n) + w.map(|v| 2.0 * reg * v);

        (loss, dw)
    }
}
