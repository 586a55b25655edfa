use num_bigint::{BigInt, BigUint};
use num_traits::One;
use proptest::prelude::*;

use rodopios::curve::{self, CurveError, CurveParams, Point, mod_inverse};

fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
}

fn affine(x_hex: &str, y_hex: &str) -> Point {
    Point::Affine {
        x: uint(x_hex),
        y: uint(y_hex),
    }
}

// -------------------------------------------------------
// 1. CURVE EQUATION
// -------------------------------------------------------

#[test]
fn generator_is_on_curve() {
    let params = CurveParams::secp256k1();
    assert!(curve::point::is_on_curve(&params, &params.g));
}

#[test]
fn off_curve_point_is_detected() {
    let params = CurveParams::secp256k1();
    let bogus = Point::Affine {
        x: BigUint::from(1u32),
        y: BigUint::from(1u32),
    };
    assert!(!curve::point::is_on_curve(&params, &bogus));
}

// -------------------------------------------------------
// 2. KNOWN MULTIPLES OF G
// -------------------------------------------------------

#[test]
fn doubling_g_matches_known_2g() {
    let params = CurveParams::secp256k1();
    let expected = affine(
        "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    );

    let doubled = curve::point::double(&params, &params.g).unwrap();
    assert_eq!(doubled, expected);
    assert!(curve::point::is_on_curve(&params, &doubled));
}

#[test]
fn adding_g_and_2g_matches_known_3g() {
    let params = CurveParams::secp256k1();
    let expected = affine(
        "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7B7DA6DFF8",
    );

    let two_g = curve::point::double(&params, &params.g).unwrap();
    let three_g = curve::point::add(&params, &params.g, &two_g).unwrap();

    assert_eq!(three_g, expected);
    assert!(curve::point::is_on_curve(&params, &three_g));
}

#[test]
fn scalar_multiples_match_repeated_addition() {
    let params = CurveParams::secp256k1();
    let alphabet = rodopios::Alphabet::greek();

    let mut accumulator = params.g.clone();
    for k in 2u32..=20 {
        accumulator = curve::point::add(&params, &accumulator, &params.g).unwrap();

        let (multiplied, _) =
            curve::scalar_multiply(&params, &BigUint::from(k), &params.g, &alphabet).unwrap();
        assert_eq!(multiplied, accumulator, "mismatch at k = {k}");
    }
}

// -------------------------------------------------------
// 3. MODULAR INVERSE
// -------------------------------------------------------

#[test]
fn inverse_of_zero_fails() {
    let p = CurveParams::secp256k1().p;
    assert_eq!(
        mod_inverse(&BigInt::from(0), &p),
        Err(CurveError::DivisionByZero)
    );
}

proptest! {
    #[test]
    fn inverse_roundtrips_over_curve_prime(k in 1u64..u64::MAX) {
        let p = CurveParams::secp256k1().p;

        let inv = mod_inverse(&BigInt::from(k), &p).unwrap();
        let product = (inv * BigUint::from(k)) % &p;
        prop_assert!(product.is_one());
    }

    #[test]
    fn negative_inputs_are_normalized(k in 1i64..i64::MAX) {
        let p = CurveParams::secp256k1().p;

        let inv_neg = mod_inverse(&BigInt::from(-k), &p).unwrap();
        let inv_pos = mod_inverse(&BigInt::from(k), &p).unwrap();

        // inv(-k) == p - inv(k) for k not divisible by p.
        prop_assert_eq!(inv_neg, &p - inv_pos);
    }
}
