//! Robust Euclidean Norm Examples
//!
//! This example demonstrates the norm computation scenarios:
//! - Basic norms with the one-call convenience function
//! - Extreme magnitudes where the naive formula fails
//! - Configured use with input validation
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use enorm::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), EnormError> {
    println!("{}", "=".repeat(60));
    println!("enorm - Robust Euclidean Norm Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_basic()?;
    example_2_extreme_magnitudes()?;
    example_3_validated()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Norms
/// Demonstrates the simplest usage with the convenience function.
fn example_1_basic() -> Result<(), EnormError> {
    println!("Example 1: Basic Norms");
    println!("{}", "-".repeat(60));

    // norm([3, 4]) = 5
    println!("norm([3, 4])       = {}", euclidean_norm(&[3.0, 4.0]));
    // norm([]) = 0
    println!("norm([])           = {}", euclidean_norm(&[]));
    // norm([1, 1, 1, 1]) = 2
    println!(
        "norm([1, 1, 1, 1]) = {}",
        euclidean_norm(&[1.0, 1.0, 1.0, 1.0])
    );
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Extreme Magnitudes
/// Demonstrates why the scaled accumulation exists.
fn example_2_extreme_magnitudes() -> Result<(), EnormError> {
    println!("Example 2: Extreme Magnitudes");
    println!("{}", "-".repeat(60));

    let x = [1e300, 1.0, 1e-300];

    let scaled = Enorm::new().method(Scaled).build()?.compute(&x)?;
    let naive = Enorm::new().method(Naive).build()?.compute(&x)?;

    // Scaled: 1e300 (finite); Naive: inf (overflowed)
    println!("scaled norm = {scaled}");
    println!("naive norm  = {naive}");
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Validated Computation
/// Demonstrates opt-in rejection of non-finite inputs.
fn example_3_validated() -> Result<(), EnormError> {
    println!("Example 3: Validated Computation");
    println!("{}", "-".repeat(60));

    let model = Enorm::new().validate(true).build()?;

    match model.compute(&[1.0, f64::NAN, 3.0]) {
        Ok(norm) => println!("norm = {norm}"),
        // Prints: rejected: Non-finite value at index 1: x[1]=NaN
        Err(e) => println!("rejected: {e}"),
    }
    println!();

    Ok(())
}
