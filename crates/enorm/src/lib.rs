//! # enorm — Overflow-Safe Euclidean Norms for Rust
//!
//! A robust implementation of the Euclidean (L2) vector norm that avoids
//! premature floating-point overflow and underflow for extreme-magnitude
//! inputs. The algorithm follows the classic MINPACK `enorm` routine used
//! inside nonlinear least-squares and trust-region solvers, where a reliable
//! norm is essential for convergence and numerical stability.
//!
//! ## Why not `sqrt(sum(x * x))`?
//!
//! Squaring a value near `1e300` overflows to infinity before the square
//! root is ever taken, and squaring a value near `1e-300` flushes to zero,
//! silently discarding information. The scaled algorithm accumulates three
//! separate sums — small, intermediate, and large magnitude components —
//! rescaling the small and large bands against their own running maxima, so
//! that every intermediate quantity stays within the safe range of IEEE-754
//! double precision. This preserves roughly 38 decades of dynamic range.
//!
//! ## Quick Start
//!
//! ```rust
//! use enorm::prelude::*;
//!
//! let x = vec![3.0, 4.0];
//! assert_eq!(euclidean_norm(&x), 5.0);
//!
//! // A vector that breaks the naive formula:
//! let extreme = vec![1e300, 1.0, 1e-300];
//! let norm = euclidean_norm(&extreme);
//! assert!(norm.is_finite());
//! assert!((norm - 1e300).abs() / 1e300 < 1e-12);
//! ```
//!
//! ## Configured Use
//!
//! The builder selects the accumulation method and an optional input
//! validation pass:
//!
//! ```rust
//! use enorm::prelude::*;
//!
//! let model = Enorm::new()
//!     .method(Scaled)     // Scaled (default) or Naive
//!     .validate(true)     // Reject NaN/Inf inputs up front
//!     .build()?;
//!
//! let norm = model.compute(&[3.0, 4.0])?;
//! assert_eq!(norm, 5.0);
//! # Result::<(), EnormError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `compute` returns a `Result<f64, EnormError>`. With validation disabled
//! (the default) it cannot fail; with validation enabled, non-finite inputs
//! are rejected with the offending index:
//!
//! ```rust
//! use enorm::prelude::*;
//!
//! let model = Enorm::new().validate(true).build()?;
//!
//! match model.compute(&[1.0, f64::NAN]) {
//!     Ok(norm) => println!("norm = {norm}"),
//!     Err(e) => eprintln!("rejected: {}", e),
//! }
//! # Result::<(), EnormError>::Ok(())
//! ```
//!
//! ## Non-Finite Inputs
//!
//! Without validation, behavior on NaN or infinite elements is unspecified,
//! matching the reference numerical-library convention. The function never
//! panics; it simply propagates whatever IEEE-754 arithmetic produces.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments and performs no heap allocation.
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! enorm = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Garbow, B. S., Hillstrom, K. E., More, J. J. (1980). MINPACK Project,
//!   Argonne National Laboratory.
//! - Blue, J. L. (1978). "A Portable Fortran Program to Find the Euclidean
//!   Norm of a Vector"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Engine - input validation.
mod engine;

// High-level fluent API for norm computation.
mod api;

// Standard enorm prelude.
pub mod prelude {
    pub use crate::api::{
        EnormBuilder as Enorm, EnormError, MachineParams, Method,
        Method::{Naive, Scaled},
        NormModel, euclidean_norm, naive_norm,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
