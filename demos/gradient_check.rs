/// Gradient-check demo for the softmax linear classifier.
///
/// Mirrors the usual development workflow for a new loss implementation:
/// 1. sanity-check the loss of a near-zero weight matrix against ln(C),
/// 2. compare the analytic gradient with a centered finite-difference
///    estimate, with and without regularization,
/// 3. confirm the naive and vectorized paths agree, and time both.
///
/// Run with:
///   cargo run --example gradient_check --release

use std::time::Instant;

use rand::Rng;
use softmax_classifier::{Matrix, SoftmaxLoss, numerical_gradient, max_rel_error};

const NUM_FEATURES: usize = 20;
const NUM_CLASSES: usize = 10;
const NUM_SAMPLES: usize = 100;

fn main() {
    let mut rng = rand::thread_rng();

    let w = Matrix::gaussian(NUM_FEATURES, NUM_CLASSES, 1e-4);
    let x = Matrix::random(NUM_SAMPLES, NUM_FEATURES);
    let y: Vec<usize> = (0..NUM_SAMPLES)
        .map(|_| rng.gen_range(0..NUM_CLASSES))
        .collect();

    // Near-zero weights make every class almost equally likely, so the
    // loss should sit near ln(C).
    let (loss, _) = SoftmaxLoss::loss_naive(&w, &x, &y, 0.0);
    println!(
        "sanity check: loss = {:.6}, ln({}) = {:.6}",
        loss,
        NUM_CLASSES,
        (NUM_CLASSES as f64).ln()
    );

    for reg in [0.0, 0.1] {
        let (_, analytic) = SoftmaxLoss::loss_naive(&w, &x, &y, reg);
        let numeric = numerical_gradient(
            |probe| SoftmaxLoss::loss_naive(probe, &x, &y, reg).0,
            &w,
            1e-5,
        );
        println!(
            "reg = {reg}: max relative gradient error = {:.3e}",
            max_rel_error(&analytic, &numeric)
        );
    }

    let t = Instant::now();
    let (loss_naive, grad_naive) = SoftmaxLoss::loss_naive(&w, &x, &y, 5e-6);
    let naive_ms = t.elapsed().as_secs_f64() * 1e3;

    let t = Instant::now();
    let (loss_vectorized, grad_vectorized) = SoftmaxLoss::loss_vectorized(&w, &x, &y, 5e-6);
    let vectorized_ms = t.elapsed().as_secs_f64() * 1e3;

    println!("naive:      loss = {loss_naive:.6} ({naive_ms:.2} ms)");
    println!("vectorized: loss = {loss_vectorized:.6} ({vectorized_ms:.2} ms)");
    println!("loss difference     = {:.3e}", (loss_naive - loss_vectorized).abs());
    println!(
        "gradient difference = {:.3e}",
        max_rel_error(&grad_naive, &grad_vectorized)
    );
}
