//! Input validation for norm computation.
//!
//! ## Purpose
//!
//! This module provides the opt-in validation pass for the checked API.
//! The scaled norm itself accepts any input; callers that want NaN and
//! infinity rejected up front enable validation through the builder.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first non-finite element.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Finite Checks**: Ensures all elements are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * An empty slice is valid; its norm is `0.0`.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not enforce length constraints; every length,
//!   including zero, is a valid input.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EnormError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for norm inputs.
///
/// Provides static methods returning `Result<(), EnormError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that every element of `x` is finite.
    pub fn validate_input<T: Float>(x: &[T]) -> Result<(), EnormError> {
        for (index, &value) in x.iter().enumerate() {
            if !value.is_finite() {
                return Err(EnormError::NonFiniteValue {
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}
