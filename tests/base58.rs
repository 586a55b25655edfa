use hex_literal::hex;

use rodopios::curve::CurveParams;
use rodopios::encoding::base58::{Base58Error, base58_encode, base58check_encode};
use rodopios::encoding::base40::Alphabet;
use rodopios::hash::hash160;
use rodopios::keys::{PrivateKey, derive_public_key};

// -------------------------------------------------------
// 1. PLAIN BASE58
// -------------------------------------------------------

#[test]
fn leading_zero_bytes_are_preserved() {
    assert_eq!(base58_encode(&hex!("0000010203")), "11Ldp");
}

#[test]
fn hello_world_vector() {
    assert_eq!(base58_encode(b"hello world"), "StV1DL6CwTryKyV");
}

#[test]
fn versioned_hash_vector() {
    // Version byte 0x00 followed by hash160 of the k = 1 public key,
    // without a checksum.
    assert_eq!(
        base58_encode(&hex!("00010966776006953d5567439e5e39f86a0d273bee")),
        "1qb3y62fmEEVTPySXPQ77WXok6H"
    );
}

#[test]
fn zero_input_collapses_to_one_symbol() {
    assert_eq!(base58_encode(&[]), "1");
    assert_eq!(base58_encode(&[0u8; 4]), "1");
}

// -------------------------------------------------------
// 2. BASE58CHECK
// -------------------------------------------------------

#[test]
fn known_hash_produces_known_address() {
    let hash = hex!("010966776006953d5567439e5e39f86a0d273bee");

    assert_eq!(
        base58check_encode(&hash, 0x00).unwrap(),
        "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM"
    );
}

#[test]
fn hash_length_is_validated() {
    assert_eq!(
        base58check_encode(&[0u8; 32], 0x00).unwrap_err(),
        Base58Error::MalformedHashInput
    );
}

// -------------------------------------------------------
// 3. FULL ADDRESS PIPELINE
// -------------------------------------------------------

#[test]
fn private_key_one_yields_the_known_bitcoin_address() {
    let params = CurveParams::secp256k1();
    let alphabet = Alphabet::greek();

    let k1_hex = format!("{:064x}", 1);
    let private_key = PrivateKey::from_hex(&params, &k1_hex).unwrap();
    let (public_key, _) = derive_public_key(&params, &private_key, &alphabet).unwrap();

    let digest = hash160(&public_key.to_uncompressed_bytes()).unwrap();
    assert_eq!(digest, hex!("010966776006953d5567439e5e39f86a0d273bee"));

    let address = base58check_encode(&digest, 0x00).unwrap();
    assert_eq!(address, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
}

#[test]
fn generated_keys_produce_plausible_addresses() {
    let params = CurveParams::secp256k1();
    let alphabet = Alphabet::greek();

    let private_key = PrivateKey::generate(&params);
    let (public_key, _) = derive_public_key(&params, &private_key, &alphabet).unwrap();

    let digest = hash160(&public_key.to_uncompressed_bytes()).unwrap();
    let address = base58check_encode(&digest, 0x00).unwrap();

    assert!(address.len() > 25 && address.len() < 36);
    assert!(address.starts_with('1'));
}
