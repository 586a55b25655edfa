//! Instrumented double-and-add scalar multiplication.
//!
//! The multiplier walks the scalar from its most significant bit to its
//! least significant bit over a fixed width of 256 iterations, so every
//! scalar yields a trace of exactly the same length regardless of where
//! its highest set bit lies. Each iteration depends on the previous
//! accumulator, which makes the loop inherently sequential.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::encoding::base40::{self, Alphabet};

use super::CurveError;
use super::params::CurveParams;
use super::point::{self, Point};
use super::trace::{Operation, StepRecord, Trace};

/// Computes `k * base` with the double-and-add algorithm, recording one
/// [`StepRecord`] per scalar bit.
///
/// The scalar must lie in `[1, n-1]`; anything else fails with
/// [`CurveError::InvalidScalar`]. The alphabet is used only to annotate
/// each step with the Base40 symbol the accumulator's x-coordinate
/// projects onto.
pub fn scalar_multiply(
    params: &CurveParams,
    k: &BigUint,
    base: &Point,
    alphabet: &Alphabet,
) -> Result<(Point, Trace), CurveError> {
    if k.is_zero() || *k >= params.n {
        return Err(CurveError::InvalidScalar);
    }

    let width = params.scalar_bits;
    let mut accumulator = Point::Identity;
    let mut records = Vec::with_capacity(width as usize);

    // Index of the previous step's symbol, if that step had one. Reset
    // whenever the accumulator passes through the identity, so symbol
    // continuity never spans a point with no symbol.
    let mut previous_symbol_index: Option<u32> = None;

    for i in (0..width).rev() {
        let bit = k.bit(u64::from(i));

        accumulator = point::double(params, &accumulator)?;
        let operation = if bit {
            accumulator = point::add(params, &accumulator, base)?;
            Operation::DoubleAndAdd
        } else {
            Operation::Double
        };

        let (angle, symbol, symbol_delta) = match accumulator.x_mod_40() {
            Some(n40) => {
                let angle = base40::number_to_angle(n40);
                let symbol_index = angle / 9;
                let delta = match previous_symbol_index {
                    Some(previous) => (symbol_index + 40 - previous) % 40,
                    None => 0,
                };
                previous_symbol_index = Some(symbol_index);

                // symbol_index is angle / 9 with angle below 360, so the
                // lookup always succeeds.
                (
                    Some(angle),
                    alphabet.symbol(symbol_index as usize),
                    Some(delta),
                )
            }
            None => {
                previous_symbol_index = None;
                (None, None, None)
            }
        };

        records.push(StepRecord {
            step_number: width - i,
            bit: u8::from(bit),
            operation,
            point: accumulator.clone(),
            angle,
            symbol,
            symbol_delta,
        });
    }

    Ok((accumulator, Trace::new(records)))
}
