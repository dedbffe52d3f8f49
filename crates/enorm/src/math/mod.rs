//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical functions of the crate:
//! - The scaled three-sum Euclidean norm (and its naive counterpart)
//! - Double-precision machine parameters
//!
//! These are reusable building blocks with no configuration logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean norm computation (scaled and naive).
pub mod norm;

/// Floating-point machine parameters.
pub mod machine;
