//! secp256k1 arithmetic and the instrumented scalar multiplier.
//!
//! This module provides everything needed to turn a private scalar into a
//! public curve point while recording how it got there:
//!
//! - finite-field helpers over the curve prime (`field`),
//! - the affine point representation with addition, doubling, and
//!   on-curve validation (`point`),
//! - the immutable curve domain parameters (`params`),
//! - the fixed-width double-and-add multiplier that emits one trace
//!   record per scalar bit (`mul`),
//! - the trace record types consumed by exporters (`trace`).
//!
//! All arithmetic is plain modular arithmetic over `BigUint`. The point
//! at infinity is an explicit enum variant, matched exhaustively at every
//! use site, so there is no sentinel value to mishandle.

pub mod field;
pub mod mul;
pub mod params;
pub mod point;
pub mod trace;

pub use field::mod_inverse;
pub use mul::scalar_multiply;
pub use params::CurveParams;
pub use point::Point;
pub use trace::{Operation, StepRecord, Trace, TraceRow};

use std::fmt;

/// Errors raised by curve arithmetic and scalar multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Scalar outside the valid range `[1, n-1]`.
    InvalidScalar,
    /// Modular inverse of a value congruent to zero.
    DivisionByZero,
    /// A valid scalar produced the identity point. This cannot happen for
    /// the secp256k1 domain parameters and signals a broken invariant,
    /// not a recoverable condition.
    UnexpectedIdentity,
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::InvalidScalar => {
                write!(f, "scalar must lie in [1, n-1]")
            }
            CurveError::DivisionByZero => {
                write!(f, "modular inverse of zero")
            }
            CurveError::UnexpectedIdentity => {
                write!(f, "scalar multiplication unexpectedly produced the identity point")
            }
        }
    }
}

impl std::error::Error for CurveError {}
