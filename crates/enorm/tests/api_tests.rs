#![cfg(feature = "dev")]
//! Tests for the public builder API.
//!
//! These tests exercise the crate exactly as a downstream solver would,
//! through the prelude.
//!
//! ## Test Organization
//!
//! 1. **Builder Configuration** - Defaults, methods, duplicate detection
//! 2. **Checked Computation** - Validation on and off
//! 3. **Convenience Function** - The one-call contract

use approx::assert_relative_eq;

use enorm::prelude::*;

// ============================================================================
// Builder Configuration Tests
// ============================================================================

/// Test computation with the default configuration.
#[test]
fn test_default_build() -> Result<(), EnormError> {
    let model = Enorm::new().build()?;

    assert_eq!(model.compute(&[3.0, 4.0])?, 5.0);
    Ok(())
}

/// Test explicit method selection.
#[test]
fn test_method_selection() -> Result<(), EnormError> {
    let scaled = Enorm::new().method(Scaled).build()?;
    let naive = Enorm::new().method(Naive).build()?;

    let x = [3.0, 4.0, 12.0];
    assert_relative_eq!(scaled.compute(&x)?, 13.0, max_relative = 1e-12);
    assert_relative_eq!(naive.compute(&x)?, 13.0, max_relative = 1e-12);
    Ok(())
}

/// Test that only the scaled method survives extreme magnitudes.
#[test]
fn test_method_divergence_on_extremes() -> Result<(), EnormError> {
    let x = [1e300, 1.0];

    let scaled = Enorm::new().method(Scaled).build()?.compute(&x)?;
    let naive = Enorm::new().method(Naive).build()?.compute(&x)?;

    assert!(scaled.is_finite());
    assert!(naive.is_infinite());
    Ok(())
}

/// Test that setting a parameter twice is rejected at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let result = Enorm::new().method(Scaled).method(Naive).build();
    assert_eq!(
        result.unwrap_err(),
        EnormError::DuplicateParameter {
            parameter: "method"
        }
    );

    let result = Enorm::new().validate(true).validate(true).build();
    assert_eq!(
        result.unwrap_err(),
        EnormError::DuplicateParameter {
            parameter: "validate"
        }
    );
}

// ============================================================================
// Checked Computation Tests
// ============================================================================

/// Test that validation rejects non-finite input with index context.
#[test]
fn test_validation_rejects_nan() -> Result<(), EnormError> {
    let model = Enorm::new().validate(true).build()?;

    match model.compute(&[1.0, f64::NAN, 3.0]) {
        Err(EnormError::NonFiniteValue { index, .. }) => assert_eq!(index, 1),
        other => panic!("expected NonFiniteValue, got {:?}", other),
    }
    Ok(())
}

/// Test that unvalidated computation accepts non-finite input.
///
/// The numerical result is unspecified in this case; only the absence of
/// an error is guaranteed.
#[test]
fn test_unvalidated_accepts_nan() -> Result<(), EnormError> {
    let model = Enorm::new().build()?;
    assert!(model.compute(&[1.0, f64::NAN]).is_ok());
    Ok(())
}

/// Test that validation passes extreme but finite data through.
#[test]
fn test_validation_accepts_extremes() -> Result<(), EnormError> {
    let model = Enorm::new().validate(true).build()?;

    let norm = model.compute(&[1e300, 1e-300])?;
    assert_relative_eq!(norm, 1e300, max_relative = 1e-12);
    Ok(())
}

/// Test that a built model is reusable across calls.
#[test]
fn test_model_reuse() -> Result<(), EnormError> {
    let model = Enorm::new().build()?;

    assert_eq!(model.compute(&[3.0, 4.0])?, 5.0);
    assert_eq!(model.compute(&[])?, 0.0);
    assert_eq!(model.compute(&[-9.0])?, 9.0);
    Ok(())
}

// ============================================================================
// Convenience Function Tests
// ============================================================================

/// Test the one-call contract.
#[test]
fn test_euclidean_norm() {
    assert_eq!(euclidean_norm(&[]), 0.0);
    assert_eq!(euclidean_norm(&[3.0, 4.0]), 5.0);
    assert!(euclidean_norm(&[1e300, 1.0]).is_finite());
}

/// Test the generic naive norm with f32 data.
#[test]
fn test_naive_norm_f32() {
    let x = [3.0f32, 4.0];
    assert_relative_eq!(naive_norm(&x), 5.0f32, max_relative = 1e-6);
}

/// Test the machine parameter query through the prelude.
#[test]
fn test_machine_params_exposed() {
    let params = MachineParams::<f64>::compute();
    assert_eq!(params.precision, f64::EPSILON);
}
