pub mod math;
pub mod loss;
pub mod gradcheck;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use loss::softmax::SoftmaxLoss;
pub use loss::strategy::LossStrategy;
pub use gradcheck::{numerical_gradient, max_rel_error};
