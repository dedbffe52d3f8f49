//! Floating-point machine parameters.
//!
//! ## Purpose
//!
//! This module exposes the three classic machine parameters used by
//! numerical software to reason about a floating-point format: the machine
//! precision, the smallest positive normal magnitude, and the largest
//! finite magnitude.
//!
//! ## Design notes
//!
//! * **Generics**: Generic over `Float`, so the same query works for `f32`
//!   and `f64`.
//! * **Compile-time**: All three values are format constants; nothing is
//!   probed at runtime.
//!
//! ## Key concepts
//!
//! For a format with base `b`, `t` digits, and exponent range
//! `[emin, emax]`:
//!
//! 1. **precision** = `b^(1 - t)` — the machine precision.
//! 2. **dwarf** = `b^(emin - 1)` — the smallest positive normal magnitude.
//! 3. **giant** = `b^emax * (1 - b^(-t))` — the largest finite magnitude.
//!
//! ## Invariants
//!
//! * `0 < dwarf < precision < giant` for every IEEE-754 format.
//!
//! ## Non-goals
//!
//! * This module does not select norm band thresholds; those are fixed
//!   constants in the norm module, validated against these parameters.

// External dependencies
use num_traits::Float;

// ============================================================================
// Machine Parameters
// ============================================================================

/// The three machine parameters of a floating-point format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineParams<T> {
    /// Machine precision, `b^(1 - t)`.
    pub precision: T,

    /// Smallest positive normal magnitude, `b^(emin - 1)`.
    pub dwarf: T,

    /// Largest finite magnitude, `b^emax * (1 - b^(-t))`.
    pub giant: T,
}

impl<T: Float> MachineParams<T> {
    /// Query the machine parameters for the format `T`.
    pub fn compute() -> Self {
        Self {
            precision: T::epsilon(),
            dwarf: T::min_positive_value(),
            giant: T::max_value(),
        }
    }
}
