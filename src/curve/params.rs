//! Curve domain parameters.
//!
//! The parameter set is constructed once at startup and passed by
//! reference into the arithmetic functions. Nothing in this crate ever
//! mutates it.

use num_bigint::BigUint;

use super::point::Point;

/// Domain parameters of a short Weierstrass curve `y² = x³ + ax + b`
/// over the prime field `F_p`, with generator `g` of order `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Prime modulus of the field.
    pub p: BigUint,
    /// Coefficient `a` of the curve equation.
    pub a: BigUint,
    /// Coefficient `b` of the curve equation.
    pub b: BigUint,
    /// Generator point.
    pub g: Point,
    /// Order of the generator.
    pub n: BigUint,
    /// Bit width of scalars; fixes the trace length.
    pub scalar_bits: u32,
}

/// Parses a hex literal that is known to be valid at compile time.
fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("valid hex curve constant")
}

impl CurveParams {
    /// The secp256k1 domain parameters (SEC 2, version 2.0).
    pub fn secp256k1() -> Self {
        let gx = uint("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");
        let gy = uint("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

        CurveParams {
            p: uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"),
            a: BigUint::from(0u32),
            b: BigUint::from(7u32),
            g: Point::Affine { x: gx, y: gy },
            n: uint("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"),
            scalar_bits: 256,
        }
    }
}
