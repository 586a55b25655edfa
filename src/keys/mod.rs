//! Key pair generation and derivation.
//!
//! Private keys are sampled by rejection: 32 bytes are drawn from a
//! cryptographically secure source and interpreted as a big-endian
//! integer, and the draw is repeated until the value lands in
//! `[1, n-1]`. The value is never reduced modulo `n` — reduction would
//! bias the low end of the range. With `n` this close to 2²⁵⁶ the
//! rejection probability is below 2⁻¹²⁷, so the loop effectively runs
//! once.
//!
//! Public keys are derived through the instrumented scalar multiplier,
//! so every derivation also yields the full 256-step trace.
//!
//! Alongside the typed API, this module exposes the hex-string boundary
//! functions the HTTP layer consumes: 64-character private keys and
//! 130-character uncompressed public keys.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::curve::{CurveError, CurveParams, Point, Trace, scalar_multiply};
use crate::encoding::base40::Alphabet;

/// Errors raised by key handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// The private key is not a 64-character hex string.
    MalformedPrivateKey,
    /// The private key parses but lies outside `[1, n-1]`.
    OutOfRange,
    /// Derivation produced the identity point. Unreachable for a valid
    /// private key under the secp256k1 parameters; treated as a fatal
    /// invariant violation.
    UnexpectedIdentity,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::MalformedPrivateKey => {
                write!(f, "private key must be a 64-character hex string")
            }
            KeyError::OutOfRange => {
                write!(f, "private key must lie in [1, n-1]")
            }
            KeyError::UnexpectedIdentity => {
                write!(f, "key derivation unexpectedly produced the identity point")
            }
        }
    }
}

impl std::error::Error for KeyError {}

impl From<CurveError> for KeyError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidScalar => KeyError::OutOfRange,
            // DivisionByZero cannot escape the group law for on-curve
            // inputs; fold it into the fatal variant.
            CurveError::DivisionByZero | CurveError::UnexpectedIdentity => {
                KeyError::UnexpectedIdentity
            }
        }
    }
}

/// A private scalar `k` with `1 ≤ k < n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    k: BigUint,
}

impl PrivateKey {
    /// Samples a fresh private key from OS randomness.
    pub fn generate(params: &CurveParams) -> Self {
        Self::from_rng(params, &mut OsRng)
    }

    /// Samples a fresh private key from the given secure generator,
    /// redrawing until the value lands in `[1, n-1]`.
    pub fn from_rng<R: RngCore + CryptoRng>(params: &CurveParams, rng: &mut R) -> Self {
        loop {
            let mut bytes = [0u8; 32];
            rng.fill_bytes(&mut bytes);

            let k = BigUint::from_bytes_be(&bytes);
            if !k.is_zero() && k < params.n {
                return PrivateKey { k };
            }
        }
    }

    /// Parses a 64-character hex private key, validating the range.
    pub fn from_hex(params: &CurveParams, hex_key: &str) -> Result<Self, KeyError> {
        if hex_key.len() != 64 {
            return Err(KeyError::MalformedPrivateKey);
        }

        let bytes: [u8; 32] = hex::decode(hex_key)
            .map_err(|_| KeyError::MalformedPrivateKey)?
            .try_into()
            .map_err(|_| KeyError::MalformedPrivateKey)?;

        let k = BigUint::from_bytes_be(&bytes);
        if k.is_zero() || k >= params.n {
            return Err(KeyError::OutOfRange);
        }

        Ok(PrivateKey { k })
    }

    /// The key as a zero-padded 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("{:064x}", self.k)
    }

    /// The raw scalar.
    pub fn value(&self) -> &BigUint {
        &self.k
    }
}

/// A public key: an affine, on-curve point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    point: Point,
}

impl PublicKey {
    /// The underlying curve point.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// The uncompressed SEC encoding: `0x04 ∥ x ∥ y`, 65 bytes.
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let (x, y) = match &self.point {
            // Construction guarantees an affine point.
            Point::Identity => unreachable!("public key is never the identity"),
            Point::Affine { x, y } => (x, y),
        };

        let mut out = [0u8; 65];
        out[0] = 0x04;

        let x_bytes = x.to_bytes_be();
        let y_bytes = y.to_bytes_be();
        out[1 + (32 - x_bytes.len())..33].copy_from_slice(&x_bytes);
        out[33 + (32 - y_bytes.len())..65].copy_from_slice(&y_bytes);

        out
    }

    /// The uncompressed encoding as a 130-character hex string.
    pub fn to_uncompressed_hex(&self) -> String {
        hex::encode(self.to_uncompressed_bytes())
    }
}

/// Derives the public key for a private key, returning the full
/// double-and-add trace alongside it.
///
/// The alphabet only annotates the trace; it does not influence the
/// resulting point.
pub fn derive_public_key(
    params: &CurveParams,
    private_key: &PrivateKey,
    alphabet: &Alphabet,
) -> Result<(PublicKey, Trace), KeyError> {
    let (point, trace) = scalar_multiply(params, &private_key.k, &params.g, alphabet)?;

    if point.is_identity() {
        return Err(KeyError::UnexpectedIdentity);
    }

    Ok((PublicKey { point }, trace))
}

/// Boundary function: generates a private key and returns it as a
/// 64-character hex string.
pub fn generate_private_key_hex(params: &CurveParams) -> String {
    PrivateKey::generate(params).to_hex()
}

/// Boundary function: derives the 130-character uncompressed public key
/// for a 64-character hex private key, plus the derivation trace.
pub fn derive_public_key_hex(
    params: &CurveParams,
    private_key_hex: &str,
    alphabet: &Alphabet,
) -> Result<(String, Trace), KeyError> {
    let private_key = PrivateKey::from_hex(params, private_key_hex)?;
    let (public_key, trace) = derive_public_key(params, &private_key, alphabet)?;

    Ok((public_key.to_uncompressed_hex(), trace))
}
