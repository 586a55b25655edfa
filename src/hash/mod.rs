//! Hashing pipeline for address derivation.
//!
//! SHA-256 and RIPEMD-160 are implemented from scratch, in the spirit of
//! the rest of the crate: explicit compression functions, no heap
//! allocations in the cores, and integration tests that cross-check
//! every digest against the RustCrypto reference crates.
//!
//! On top of the two primitives this module provides the combinations
//! the address layer needs:
//!
//! - [`hash160`] — `RIPEMD160(SHA256(bytes))` of an uncompressed public
//!   key,
//! - [`checksum`] — the first 4 bytes of a double SHA-256, used by
//!   Base58Check.

pub mod ripemd160;
pub mod sha256;

pub use ripemd160::ripemd160;
pub use sha256::sha256;

use std::fmt;

/// Errors raised by the hashing pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The public key is not a 65-byte uncompressed SEC encoding
    /// starting with `0x04`.
    MalformedPublicKey,
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::MalformedPublicKey => {
                write!(f, "public key must be 65 uncompressed bytes starting with 0x04")
            }
        }
    }
}

impl std::error::Error for HashError {}

/// Computes `RIPEMD160(SHA256(public_key))`, the 20-byte digest a
/// Base58Check address is built from.
///
/// The input must be the uncompressed SEC encoding: 65 bytes, prefix
/// `0x04`, followed by the 32-byte x and y coordinates.
pub fn hash160(public_key: &[u8]) -> Result<[u8; 20], HashError> {
    if public_key.len() != 65 || public_key[0] != 0x04 {
        return Err(HashError::MalformedPublicKey);
    }

    Ok(ripemd160(&sha256(public_key)))
}

/// Hex-string entry point for [`hash160`]: takes the 130-character
/// uncompressed public key (`04` followed by two 64-character
/// coordinates) the API layer passes around, and returns the digest as
/// a 40-character hex string.
pub fn hash160_hex(public_key_hex: &str) -> Result<String, HashError> {
    if public_key_hex.len() != 130 || !public_key_hex.starts_with("04") {
        return Err(HashError::MalformedPublicKey);
    }

    let bytes = hex::decode(public_key_hex).map_err(|_| HashError::MalformedPublicKey)?;
    Ok(hex::encode(hash160(&bytes)?))
}

/// Base58Check checksum: the first 4 bytes of `SHA256(SHA256(payload))`.
pub fn checksum(payload: &[u8]) -> [u8; 4] {
    let double = sha256(&sha256(payload));

    let mut out = [0u8; 4];
    out.copy_from_slice(&double[..4]);
    out
}
