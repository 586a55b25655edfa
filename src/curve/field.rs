//! Finite-field helpers over the curve prime.
//!
//! The field operations here are deliberately simple: values are kept
//! reduced in `[0, p)` as `BigUint`, and subtraction is done by adding
//! the modulus first so intermediate values never go negative.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use super::CurveError;

/// Computes the modular multiplicative inverse of `k` modulo the prime
/// `p`, using Fermat's little theorem: `k⁻¹ ≡ k^(p-2) (mod p)`.
///
/// `k` may be negative; it is normalized into `[0, p)` first. A value
/// congruent to zero has no inverse and yields
/// [`CurveError::DivisionByZero`].
pub fn mod_inverse(k: &BigInt, p: &BigUint) -> Result<BigUint, CurveError> {
    let p_signed = BigInt::from_biguint(Sign::Plus, p.clone());
    let normalized = ((k % &p_signed) + &p_signed) % &p_signed;

    // Sign is Plus or NoSign after normalization.
    let reduced = normalized.to_biguint().expect("normalized value is non-negative");

    if reduced.is_zero() {
        return Err(CurveError::DivisionByZero);
    }

    let exponent = p - BigUint::from(2u32);
    Ok(reduced.modpow(&exponent, p))
}

/// Reduced subtraction: `(a - b) mod p` for `a, b` already in `[0, p)`.
pub(crate) fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a + p) - b) % p
}

/// Reduced multiplication: `(a * b) mod p`.
pub(crate) fn mul_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// Convenience wrapper for inverting a value already reduced in `[0, p)`.
pub(crate) fn inverse_of(value: &BigUint, p: &BigUint) -> Result<BigUint, CurveError> {
    mod_inverse(&BigInt::from_biguint(Sign::Plus, value.clone()), p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    #[test]
    fn inverse_of_one_is_one() {
        let p = BigUint::from(17u32);
        let inv = mod_inverse(&BigInt::from(1), &p).unwrap();
        assert!(inv.is_one());
    }

    #[test]
    fn inverse_times_value_is_one() {
        let p = BigUint::from(17u32);
        for k in 1u32..17 {
            let inv = mod_inverse(&BigInt::from(k), &p).unwrap();
            assert!((inv * k % &p).is_one(), "failed for k = {k}");
        }
    }

    #[test]
    fn negative_values_are_normalized() {
        let p = BigUint::from(17u32);
        let inv_neg = mod_inverse(&BigInt::from(-3), &p).unwrap();
        let inv_pos = mod_inverse(&BigInt::from(14), &p).unwrap();
        assert_eq!(inv_neg, inv_pos);
    }

    #[test]
    fn zero_has_no_inverse() {
        let p = BigUint::from(17u32);
        assert_eq!(mod_inverse(&BigInt::from(0), &p), Err(CurveError::DivisionByZero));
        assert_eq!(mod_inverse(&BigInt::from(17), &p), Err(CurveError::DivisionByZero));
        assert_eq!(mod_inverse(&BigInt::from(-17), &p), Err(CurveError::DivisionByZero));
    }
}
