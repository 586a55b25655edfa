//! Elliptic-curve key material with an auditable derivation trace.
//!
//! This crate computes secp256k1 key pairs and derives the textual
//! encodings used by the Rodopios visualizer: a custom Base40 positional
//! numeral system and Base58Check addresses. Unlike a general-purpose
//! curve library, the scalar multiplier here is *instrumented*: every one
//! of the 256 double-and-add steps is recorded, together with the Base40
//! symbol the intermediate point projects onto, so that the whole
//! derivation can be replayed and visualized after the fact.
//!
//! The focus is on **clarity, predictability, and auditability**. All
//! arithmetic is exact modular arithmetic over arbitrary-precision
//! integers; there is no floating point and no hidden global state.
//!
//! # Module overview
//!
//! - `curve`
//!   Finite-field helpers, affine point arithmetic on secp256k1, and the
//!   instrumented double-and-add scalar multiplier producing a fixed
//!   256-entry trace.
//!
//! - `keys`
//!   Private-key sampling (rejection sampling over OS randomness) and
//!   public-key derivation, plus the hex-string boundary consumed by the
//!   API layer.
//!
//! - `hash`
//!   From-scratch SHA-256 and RIPEMD-160 cores, combined into the
//!   `hash160` pipeline and the 4-byte double-SHA-256 checksum.
//!
//! - `encoding`
//!   The Base40 positional codec with its validated 40-symbol alphabets
//!   and angle/symbol projections, and the Base58 / Base58Check encoder.
//!
//! # Design goals
//!
//! - Explicit, exhaustively matched point representation (no sentinel
//!   values for the identity)
//! - Pure, synchronous functions over immutable inputs
//! - Typed errors for every validation failure, no panics in library code
//! - Curve parameters and alphabets passed explicitly, never as mutable
//!   globals
//!
//! This crate deliberately leaves out side-channel resistance and
//! constant-time arithmetic: it is a teaching and visualization engine,
//! not a wallet.

pub mod curve;
pub mod encoding;
pub mod hash;
pub mod keys;

pub use curve::{CurveError, CurveParams, Operation, Point, StepRecord, Trace};
pub use encoding::base40::Alphabet;
pub use keys::{PrivateKey, PublicKey};
