#![cfg(feature = "dev")]
//! Tests for floating-point machine parameters.
//!
//! These tests verify the machine parameter queries and revalidate the
//! norm band thresholds against them, as required when porting the
//! constants to a floating-point format.
//!
//! ## Test Organization
//!
//! 1. **Parameter Values** - Agreement with the standard library constants
//! 2. **Threshold Invariants** - `RDWARF`/`RGIANT` safety in binary64

use enorm::internals::math::machine::MachineParams;
use enorm::internals::math::norm::{RDWARF, RGIANT};

// ============================================================================
// Parameter Value Tests
// ============================================================================

/// Test the binary64 machine parameters.
#[test]
fn test_f64_parameters() {
    let params = MachineParams::<f64>::compute();

    assert_eq!(params.precision, f64::EPSILON);
    assert_eq!(params.dwarf, f64::MIN_POSITIVE);
    assert_eq!(params.giant, f64::MAX);
}

/// Test the binary32 machine parameters.
#[test]
fn test_f32_parameters() {
    let params = MachineParams::<f32>::compute();

    assert_eq!(params.precision, f32::EPSILON);
    assert_eq!(params.dwarf, f32::MIN_POSITIVE);
    assert_eq!(params.giant, f32::MAX);
}

/// Test the ordering invariant of the three parameters.
#[test]
fn test_parameter_ordering() {
    let params = MachineParams::<f64>::compute();

    assert!(params.dwarf > 0.0);
    assert!(params.dwarf < params.precision);
    assert!(params.precision < params.giant);
}

// ============================================================================
// Threshold Invariant Tests
// ============================================================================

/// Test that the small-band threshold squares to a positive value.
#[test]
fn test_rdwarf_square_does_not_underflow() {
    assert!(RDWARF * RDWARF > 0.0);
}

/// Test that the large-band scaling constant squares to a finite value.
#[test]
fn test_rgiant_square_does_not_overflow() {
    let square = RGIANT * RGIANT;
    assert!(square.is_finite());
    assert!(square < MachineParams::<f64>::compute().giant);
}

/// Test that the thresholds sit strictly inside the representable range.
#[test]
fn test_thresholds_within_range() {
    let params = MachineParams::<f64>::compute();

    assert!(RDWARF > params.dwarf);
    assert!(RGIANT < params.giant);
    assert!(RDWARF < RGIANT);
}
