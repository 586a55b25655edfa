//! Textual encodings derived from key material.
//!
//! Two unrelated numeral systems live here:
//!
//! - `base40` — the visualizer's own 40-symbol positional system, with
//!   the angle/symbol projections used to annotate scalar-multiplication
//!   traces,
//! - `base58` — Bitcoin-style Base58 and Base58Check encoding of
//!   version-prefixed hashes.
//!
//! Both encoders treat their input as a big-endian unsigned integer and
//! are deterministic; neither keeps any state between calls.

pub mod base40;
pub mod base58;

pub use base40::{Alphabet, base40_to_decimal, decimal_to_base40, ripemd160_to_base40};
pub use base58::{base58_encode, base58check_encode};
