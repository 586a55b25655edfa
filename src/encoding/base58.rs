//! Base58 and Base58Check encoding.
//!
//! Uses the Bitcoin alphabet (no `0`, `O`, `I`, `l`). Decoding is
//! intentionally not provided; the visualizer only ever renders
//! addresses.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::hash::checksum;

/// The Bitcoin Base58 alphabet.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Errors raised by Base58Check encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// The payload hash does not have the required 20 bytes.
    MalformedHashInput,
}

impl fmt::Display for Base58Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base58Error::MalformedHashInput => {
                write!(f, "RIPEMD-160 hash must be exactly 20 bytes")
            }
        }
    }
}

impl std::error::Error for Base58Error {}

/// Encodes bytes as Base58, treating them as one big-endian unsigned
/// integer.
///
/// Each leading `0x00` byte of the input becomes one leading `'1'`
/// (the alphabet's zero symbol), preserving the expected string length
/// of addresses with leading zero bytes. Empty or all-zero input yields
/// the single zero symbol.
pub fn base58_encode(data: &[u8]) -> String {
    let mut num = BigUint::from_bytes_be(data);

    if num.is_zero() {
        return char::from(BASE58_ALPHABET[0]).to_string();
    }

    let fifty_eight = BigUint::from(58u32);
    let mut digits: Vec<u8> = Vec::new();

    while !num.is_zero() {
        let remainder = &num % &fifty_eight;
        // A remainder modulo 58 always fits in a usize.
        digits.push(BASE58_ALPHABET[remainder.to_usize().expect("remainder below 58")]);
        num /= &fifty_eight;
    }

    for byte in data {
        if *byte == 0 {
            digits.push(BASE58_ALPHABET[0]);
        } else {
            break;
        }
    }

    digits.reverse();
    String::from_utf8(digits).expect("alphabet is ASCII")
}

/// Base58Check-encodes a 20-byte hash with a version byte:
/// `base58(version ∥ hash ∥ SHA256(SHA256(version ∥ hash))[..4])`.
pub fn base58check_encode(hash160: &[u8], version_byte: u8) -> Result<String, Base58Error> {
    if hash160.len() != 20 {
        return Err(Base58Error::MalformedHashInput);
    }

    let mut payload = Vec::with_capacity(25);
    payload.push(version_byte);
    payload.extend_from_slice(hash160);

    let check = checksum(&payload);
    payload.extend_from_slice(&check);

    Ok(base58_encode(&payload))
}
