//! High-level API for norm computation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring the accumulation method and validation policy,
//! and a free convenience function for the common case.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters.
//! * **Validated**: Builder misuse (duplicate parameters) is reported when
//!   `.build()` is called.
//! * **Reusable**: The built model is `Copy` and can be applied to any
//!   number of vectors.
//!
//! ## Key concepts
//!
//! * **Accumulation Methods**: `Scaled` (overflow-safe, default) and
//!   `Naive` (fast, safe-band only).
//! * **Configuration Flow**: `Enorm::new()` → chained setters →
//!   `.build()` → `compute()`.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`EnormBuilder`] via `Enorm::new()`.
//! 2. Chain configuration methods (`.method()`, `.validate()`).
//! 3. Call `.build()` to obtain a [`NormModel`].

// Internal dependencies
use crate::engine::validator::Validator;
use crate::math::norm::{naive_norm_f64, scaled_norm};

// Publicly re-exported types
pub use crate::math::machine::MachineParams;
pub use crate::math::norm::naive_norm;
pub use crate::math::norm::{RDWARF, RGIANT};
pub use crate::primitives::errors::EnormError;

// ============================================================================
// Accumulation Method
// ============================================================================

/// Accumulation method for the Euclidean norm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Three-sum scaled accumulation, robust against overflow and
    /// underflow (default).
    #[default]
    Scaled,

    /// Direct sum of squares. Faster, but overflows for elements above
    /// roughly `1e154`.
    Naive,
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring norm computation.
#[derive(Debug, Clone, Default)]
pub struct EnormBuilder {
    /// Accumulation method (default: Scaled).
    pub method: Option<Method>,

    /// Reject non-finite inputs before computing (default: false).
    pub validate: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl EnormBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            validate: None,
            duplicate_param: None,
        }
    }

    /// Set the accumulation method.
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Enable or disable input validation.
    pub fn validate(mut self, validate: bool) -> Self {
        if self.validate.is_some() {
            self.duplicate_param = Some("validate");
        }
        self.validate = Some(validate);
        self
    }

    /// Validate the configuration and build a reusable [`NormModel`].
    pub fn build(self) -> Result<NormModel, EnormError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(EnormError::DuplicateParameter { parameter });
        }

        Ok(NormModel {
            method: self.method.unwrap_or_default(),
            validate: self.validate.unwrap_or(false),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured, reusable norm computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormModel {
    method: Method,
    validate: bool,
}

impl NormModel {
    /// Compute the Euclidean norm of `x` under the configured policy.
    ///
    /// With validation enabled, non-finite elements are rejected with
    /// [`EnormError::NonFiniteValue`]; otherwise this cannot fail.
    pub fn compute(&self, x: &[f64]) -> Result<f64, EnormError> {
        if self.validate {
            Validator::validate_input(x)?;
        }

        Ok(match self.method {
            Method::Scaled => scaled_norm(x),
            Method::Naive => naive_norm_f64(x),
        })
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// Compute the Euclidean norm of `x` with the scaled algorithm.
///
/// Equivalent to the default model without validation; the one-call form
/// of the library. Returns `0.0` for the empty vector. Behavior on
/// non-finite elements is unspecified.
pub fn euclidean_norm(x: &[f64]) -> f64 {
    scaled_norm(x)
}
