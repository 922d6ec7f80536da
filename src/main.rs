// This binary crate is intentionally minimal.
// All classifier logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example gradient_check
fn main() {
    println!("softmax-classifier: softmax loss and gradients for linear classifiers.");
    println!("Run `cargo run --example gradient_check` to compare the naive and vectorized paths.");
}
