//! Euclidean norm computation.
//!
//! ## Purpose
//!
//! This module provides the core scaled three-sum Euclidean norm, robust
//! against overflow and underflow across the full double-precision exponent
//! range, plus a naive sum-of-squares norm for data known to stay within
//! the safe band.
//!
//! ## Design notes
//!
//! * **Band Splitting**: Each element is classified as small, intermediate,
//!   or large; small and large bands are rescaled against their own running
//!   maxima so no intermediate quantity overflows or underflows.
//! * **Single Pass**: One element at a time, O(1) extra state.
//! * **Purity**: No allocation, no mutation of the input, no shared state;
//!   safe to call concurrently from any number of threads.
//!
//! ## Key concepts
//!
//! * **`RDWARF` / `RGIANT`**: The band thresholds. `RDWARF^2` must not
//!   underflow to zero and `RGIANT^2` must not overflow; the values here
//!   are tuned for IEEE-754 binary64 and must be revalidated for any other
//!   format.
//! * **Running-max rescaling**: Sums of squared ratios against the band
//!   maximum, multiplied back by the maximum at the end.
//!
//! ## Invariants
//!
//! * The result is non-negative for all finite inputs.
//! * The empty vector has norm exactly `0.0`.
//! * Band boundaries: small is the closed interval `[0, RDWARF]`,
//!   intermediate is open `(RDWARF, RGIANT / n)`, large is
//!   `[RGIANT / n, inf)`.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs; behavior on NaN or infinite
//!   elements is unspecified (see the engine layer for opt-in validation).
//! * This module does not provide vector or matrix abstractions.

// External dependencies
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// Band Thresholds
// ============================================================================

/// Lower band threshold.
///
/// Elements with magnitude at or below `RDWARF` accumulate in the small
/// band. Chosen so that `RDWARF^2` does not underflow to zero in binary64.
pub const RDWARF: f64 = 3.834e-20;

/// Upper band scaling constant.
///
/// The large-band threshold is `RGIANT / n` for an n-element vector, which
/// guards against overflow when up to `n` near-threshold squares are
/// summed. Chosen so that `RGIANT^2` does not overflow in binary64.
pub const RGIANT: f64 = 1.304e19;

// ============================================================================
// Scaled Norm
// ============================================================================

/// Compute the Euclidean norm of `x` using three scaled accumulators.
///
/// Robust against overflow and underflow: `scaled_norm(&[1e300, 1.0])` is
/// finite, where the naive formula would square `1e300` into infinity.
///
/// Returns `0.0` for the empty vector. Behavior on non-finite elements is
/// unspecified.
pub fn scaled_norm(x: &[f64]) -> f64 {
    let n = x.len();

    // The large-band threshold divides by n, so the empty vector is
    // resolved before any arithmetic.
    if n == 0 {
        return 0.0;
    }

    // Band accumulators: s1/x1max large, s2 intermediate, s3/x3max small.
    let mut s1 = 0.0;
    let mut s2 = 0.0;
    let mut s3 = 0.0;
    let mut x1max = 0.0;
    let mut x3max = 0.0;

    let agiant = RGIANT / n as f64;

    for &value in x {
        let xabs = value.abs();

        if xabs > RDWARF && xabs < agiant {
            // Intermediate band: direct accumulation cannot overflow or
            // underflow here.
            s2 += xabs * xabs;
        } else if xabs <= RDWARF {
            // Small band.
            if xabs > x3max {
                let ratio = x3max / xabs;
                s3 = 1.0 + s3 * (ratio * ratio);
                x3max = xabs;
            } else if xabs != 0.0 {
                let ratio = xabs / x3max;
                s3 += ratio * ratio;
            }
        } else {
            // Large band.
            if xabs > x1max {
                let ratio = x1max / xabs;
                s1 = 1.0 + s1 * (ratio * ratio);
                x1max = xabs;
            } else {
                let ratio = xabs / x1max;
                s1 += ratio * ratio;
            }
        }
    }

    // Combine the three sums, scaling by whichever band dominates.
    if s1 != 0.0 {
        x1max * (s1 + (s2 / x1max) / x1max).sqrt()
    } else if s2 != 0.0 {
        if s2 >= x3max {
            (s2 * (1.0 + (x3max / s2) * (x3max * s3))).sqrt()
        } else {
            (x3max * ((s2 / x3max) + (x3max * s3))).sqrt()
        }
    } else {
        x3max * s3.sqrt()
    }
}

// ============================================================================
// Naive Norm
// ============================================================================

/// Compute the Euclidean norm of `x` by direct sum of squares.
///
/// Faster than [`scaled_norm`] but overflows for elements above roughly
/// `1e154` and loses small components below roughly `1e-154`. Use only
/// when the data provably stays within the safe band.
pub fn naive_norm<T: Float>(x: &[T]) -> T {
    let mut sum = T::zero();
    for &value in x {
        sum = sum + value * value;
    }
    sum.sqrt()
}

/// SIMD fast path for [`naive_norm`] over `f64` slices.
///
/// Accumulates two lanes at a time, then folds the remainder serially.
pub fn naive_norm_f64(x: &[f64]) -> f64 {
    let mut acc = f64x2::splat(0.0);

    let mut chunks = x.chunks_exact(2);
    for pair in &mut chunks {
        let v = f64x2::new([pair[0], pair[1]]);
        acc += v * v;
    }

    let mut sum = acc.reduce_add();
    for &value in chunks.remainder() {
        sum += value * value;
    }

    sum.sqrt()
}
