//! Base40 positional numeral system.
//!
//! Numbers are written in a 40-symbol alphabet, most significant digit
//! first. The 40 symbols double as the 40 spokes of the visualizer's
//! symbol circle: digit `i` sits at angle `i * 9` degrees, which is why
//! the alphabet size is fixed at exactly 40 (360 / 9).
//!
//! Alphabets are caller-supplied and validated once at construction;
//! the two sets shipped with the original visualizer (a Greek-letter set
//! and an ASCII alternate) are available as constructors.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// The canonical Greek-letter symbol set of the visualizer.
pub const GREEK_SYMBOLS: [char; 40] = [
    'α', 'β', 'γ', 'Δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', //
    'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ', 'τ', 'υ', //
    'φ', 'χ', 'ψ', 'Ω', 'Ϙ', 'ω', 'Ϟ', 'Ϡ', 'Ҕ', 'Ԛ', //
    'Ӄ', 'Џ', 'Ʃ', 'Ɣ', 'Ӂ', 'Ҙ', 'ʤ', '⌀', 'ℓ', '∂',
];

/// ASCII alternate set: uppercase letters without the easily confused
/// `I`/`O`, the digits 2-9, and the first eight lowercase letters.
pub const ASCII_SYMBOLS: [char; 40] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', //
    'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', //
    'W', 'X', 'Y', 'Z', '2', '3', '4', '5', '6', '7', //
    '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
];

/// Errors raised by Base40 encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base40Error {
    /// The alphabet does not contain exactly 40 distinct symbols.
    InvalidAlphabet,
    /// An empty string was passed where symbols are required.
    EmptyInput,
    /// A symbol is not part of the alphabet.
    SymbolNotFound(char),
    /// An angle that is not a non-negative multiple of 9 below 360.
    InvalidAngle(u32),
    /// The input hash does not have the required 20 bytes.
    MalformedHashInput,
}

impl fmt::Display for Base40Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base40Error::InvalidAlphabet => {
                write!(f, "alphabet must contain exactly 40 distinct symbols")
            }
            Base40Error::EmptyInput => write!(f, "input string is empty"),
            Base40Error::SymbolNotFound(symbol) => {
                write!(f, "symbol '{symbol}' is not part of the alphabet")
            }
            Base40Error::InvalidAngle(angle) => {
                write!(f, "angle {angle} is not a multiple of 9 below 360")
            }
            Base40Error::MalformedHashInput => {
                write!(f, "RIPEMD-160 hash must be exactly 20 bytes")
            }
        }
    }
}

impl std::error::Error for Base40Error {}

/// A validated, immutable ordering of exactly 40 distinct symbols.
///
/// The position of a symbol defines its numeral value: index 0 is the
/// zero digit, index 39 the highest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; 40],
}

impl Alphabet {
    /// Validates a symbol set: exactly 40 entries, no duplicates.
    pub fn new(symbols: &[char]) -> Result<Self, Base40Error> {
        let symbols: [char; 40] = symbols
            .try_into()
            .map_err(|_| Base40Error::InvalidAlphabet)?;

        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(Base40Error::InvalidAlphabet);
            }
        }

        Ok(Alphabet { symbols })
    }

    /// The canonical Greek-letter alphabet.
    pub fn greek() -> Self {
        Alphabet {
            symbols: GREEK_SYMBOLS,
        }
    }

    /// The ASCII alternate alphabet.
    pub fn ascii() -> Self {
        Alphabet {
            symbols: ASCII_SYMBOLS,
        }
    }

    /// The symbol at a digit index, or `None` for indices of 40 and up.
    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The digit index of a symbol, or [`Base40Error::SymbolNotFound`].
    pub fn index_of(&self, symbol: char) -> Result<usize, Base40Error> {
        self.symbols
            .iter()
            .position(|&s| s == symbol)
            .ok_or(Base40Error::SymbolNotFound(symbol))
    }

    /// The symbols in digit order.
    pub fn symbols(&self) -> &[char; 40] {
        &self.symbols
    }
}

/// Maps a number onto the symbol circle: `(n * 9) mod 360` degrees.
///
/// Defined for any `n`, not just residues below 40; the multiply is
/// widened so large inputs reduce correctly instead of overflowing.
pub fn number_to_angle(n: u32) -> u32 {
    ((u64::from(n) * 9) % 360) as u32
}

/// The symbol sitting at an angle of the circle. The angle must be a
/// multiple of 9 below 360, i.e. one of the 40 spokes.
pub fn angle_to_symbol(angle: u32, alphabet: &Alphabet) -> Result<char, Base40Error> {
    if angle >= 360 || angle % 9 != 0 {
        return Err(Base40Error::InvalidAngle(angle));
    }
    Ok(alphabet.symbols[(angle / 9) as usize])
}

/// Writes a non-negative integer in Base40, most significant digit
/// first. Zero encodes as the single zero symbol.
pub fn decimal_to_base40(value: &BigUint, alphabet: &Alphabet) -> String {
    if value.is_zero() {
        return alphabet.symbols[0].to_string();
    }

    let forty = BigUint::from(40u32);
    let mut digits = Vec::new();
    let mut remaining = value.clone();

    while !remaining.is_zero() {
        let digit = &remaining % &forty;
        // A remainder modulo 40 always fits in a usize.
        digits.push(alphabet.symbols[digit.to_usize().expect("digit below 40")]);
        remaining /= &forty;
    }

    digits.iter().rev().collect()
}

/// Reads a Base40 string back into an integer.
///
/// Fails with [`Base40Error::EmptyInput`] on an empty string and
/// [`Base40Error::SymbolNotFound`] on any symbol outside the alphabet.
pub fn base40_to_decimal(encoded: &str, alphabet: &Alphabet) -> Result<BigUint, Base40Error> {
    if encoded.is_empty() {
        return Err(Base40Error::EmptyInput);
    }

    let forty = BigUint::from(40u32);
    let mut value = BigUint::zero();

    for symbol in encoded.chars() {
        let index = alphabet.index_of(symbol)?;
        value = value * &forty + BigUint::from(index);
    }

    Ok(value)
}

/// Renders a 20-byte RIPEMD-160 digest as a Base40 string, left-padded
/// with the zero symbol to `target_length` characters.
///
/// A digest whose natural encoding is longer than `target_length` is
/// returned unpadded and untruncated; 160 bits never exceed 31 Base40
/// digits, so the default target of 31 can always be met.
pub fn ripemd160_to_base40(
    hash: &[u8],
    target_length: usize,
    alphabet: &Alphabet,
) -> Result<String, Base40Error> {
    if hash.len() != 20 {
        return Err(Base40Error::MalformedHashInput);
    }

    let encoded = decimal_to_base40(&BigUint::from_bytes_be(hash), alphabet);
    if encoded.chars().count() >= target_length {
        return Ok(encoded);
    }

    let padding = target_length - encoded.chars().count();
    let mut padded = String::with_capacity(target_length);
    for _ in 0..padding {
        padded.push(alphabet.symbols[0]);
    }
    padded.push_str(&encoded);

    Ok(padded)
}
