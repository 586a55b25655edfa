use num_bigint::BigUint;
use num_traits::{One, Zero};

use rodopios::curve::CurveParams;
use rodopios::encoding::base40::Alphabet;
use rodopios::keys::{
    KeyError, PrivateKey, derive_public_key, derive_public_key_hex, generate_private_key_hex,
};

const GX_HEX: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const GY_HEX: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

// -------------------------------------------------------
// 1. KEY GENERATION
// -------------------------------------------------------

#[test]
fn generated_keys_are_in_range() {
    let params = CurveParams::secp256k1();

    for _ in 0..16 {
        let key = PrivateKey::generate(&params);
        assert!(!key.value().is_zero());
        assert!(key.value() < &params.n);
    }
}

#[test]
fn generated_hex_keys_round_trip() {
    let params = CurveParams::secp256k1();

    let hex_key = generate_private_key_hex(&params);
    assert_eq!(hex_key.len(), 64);

    let parsed = PrivateKey::from_hex(&params, &hex_key).unwrap();
    assert_eq!(parsed.to_hex(), hex_key);
}

#[test]
fn to_hex_pads_small_scalars() {
    let params = CurveParams::secp256k1();
    let one_hex = format!("{:064x}", BigUint::one());

    let key = PrivateKey::from_hex(&params, &one_hex).unwrap();
    assert_eq!(key.to_hex(), one_hex);
    assert_eq!(key.to_hex().len(), 64);
}

// -------------------------------------------------------
// 2. VALIDATION
// -------------------------------------------------------

#[test]
fn malformed_private_keys_are_rejected() {
    let params = CurveParams::secp256k1();

    // Too short.
    assert_eq!(
        PrivateKey::from_hex(&params, "1234").unwrap_err(),
        KeyError::MalformedPrivateKey
    );

    // Not hex.
    let non_hex = "xx".repeat(32);
    assert_eq!(
        PrivateKey::from_hex(&params, &non_hex).unwrap_err(),
        KeyError::MalformedPrivateKey
    );
}

#[test]
fn out_of_range_private_keys_are_rejected() {
    let params = CurveParams::secp256k1();

    let zero = "00".repeat(32);
    assert_eq!(
        PrivateKey::from_hex(&params, &zero).unwrap_err(),
        KeyError::OutOfRange
    );

    let order = format!("{:064x}", params.n);
    assert_eq!(
        PrivateKey::from_hex(&params, &order).unwrap_err(),
        KeyError::OutOfRange
    );
}

// -------------------------------------------------------
// 3. DERIVATION
// -------------------------------------------------------

#[test]
fn k1_derives_the_generator() {
    let params = CurveParams::secp256k1();
    let alphabet = Alphabet::greek();

    let k1_hex = format!("{:064x}", BigUint::one());
    let (public_hex, trace) = derive_public_key_hex(&params, &k1_hex, &alphabet).unwrap();

    assert_eq!(public_hex, format!("04{GX_HEX}{GY_HEX}"));
    assert_eq!(public_hex.len(), 130);
    assert_eq!(trace.len(), 256);
    assert_eq!(trace.records().last().unwrap().point, params.g);
}

#[test]
fn typed_and_hex_derivation_agree() {
    let params = CurveParams::secp256k1();
    let alphabet = Alphabet::greek();

    let private_key = PrivateKey::generate(&params);
    let (public_key, _) = derive_public_key(&params, &private_key, &alphabet).unwrap();
    let (public_hex, _) =
        derive_public_key_hex(&params, &private_key.to_hex(), &alphabet).unwrap();

    assert_eq!(public_key.to_uncompressed_hex(), public_hex);

    let bytes = public_key.to_uncompressed_bytes();
    assert_eq!(bytes.len(), 65);
    assert_eq!(bytes[0], 0x04);
}

#[test]
fn derivation_rejects_invalid_hex_keys() {
    let params = CurveParams::secp256k1();
    let alphabet = Alphabet::greek();

    let zero = "00".repeat(32);
    assert_eq!(
        derive_public_key_hex(&params, &zero, &alphabet).unwrap_err(),
        KeyError::OutOfRange
    );

    assert_eq!(
        derive_public_key_hex(&params, "1234", &alphabet).unwrap_err(),
        KeyError::MalformedPrivateKey
    );
}
