//! Error types for norm computation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when computing
//! norms through the checked API: non-finite input values and builder
//! misconfiguration.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   index and element).
//! * **No-std**: No variant owns heap-allocated data, so the type works
//!   without `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite values caught by the opt-in
//!    validation pass.
//! 2. **Builder validation**: Parameters set more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * The unchecked computation paths never construct an error.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not signal numerical conditions (overflow, underflow);
//!   those are prevented by the algorithm, not reported.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for norm computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnormError {
    /// Input contains a NaN or infinite element (checked mode only).
    NonFiniteValue {
        /// Index of the offending element.
        index: usize,
        /// The offending value, widened to `f64`.
        value: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EnormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NonFiniteValue { index, value } => {
                write!(f, "Non-finite value at index {index}: x[{index}]={value}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for EnormError {}
