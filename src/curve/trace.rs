//! Trace records emitted by the instrumented scalar multiplier.
//!
//! A [`Trace`] is created atomically by one `scalar_multiply` call and
//! is immutable afterwards. It exists purely for display and export;
//! nothing in the crate feeds it back into a computation.

use std::fmt;

use super::point::Point;

/// The group operation(s) applied during one double-and-add step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The accumulator was only doubled (scalar bit was 0).
    Double,
    /// The accumulator was doubled and the base point added (bit was 1).
    DoubleAndAdd,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Double => write!(f, "Double"),
            Operation::DoubleAndAdd => write!(f, "Double & Add G"),
        }
    }
}

/// One step of the double-and-add loop.
///
/// `angle` and `symbol` are `None` exactly when `point` is the identity:
/// the point at infinity has no x-coordinate to project onto the symbol
/// circle. `symbol_delta` follows the same rule; the first affine point
/// after an identity stretch starts over with a delta of 0 rather than
/// wrapping around from a symbol that never existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    /// Step index, 1-based, counted from the most significant bit.
    pub step_number: u32,
    /// The scalar bit processed in this step, 0 or 1.
    pub bit: u8,
    /// Which group operations ran in this step.
    pub operation: Operation,
    /// The accumulator after this step.
    pub point: Point,
    /// Angle of the accumulator's x-coordinate on the symbol circle,
    /// `(x mod 40) * 9 mod 360`.
    pub angle: Option<u32>,
    /// Base40 symbol at that angle.
    pub symbol: Option<char>,
    /// Circular difference to the previous step's symbol index, in
    /// `[0, 39]`.
    pub symbol_delta: Option<u32>,
}

/// Flat export view of a [`StepRecord`], matching the row contract the
/// CSV/JSON exporters consume.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TraceRow {
    pub step_number: u32,
    pub bit: char,
    pub operation: String,
    pub point_x_hex: Option<String>,
    pub point_y_hex: Option<String>,
    pub angle: Option<u32>,
    pub symbol: Option<char>,
    pub symbol_delta: Option<u32>,
}

/// The full execution trace of one scalar multiplication: exactly one
/// [`StepRecord`] per scalar bit, most significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    records: Vec<StepRecord>,
}

impl Trace {
    pub(crate) fn new(records: Vec<StepRecord>) -> Self {
        Trace { records }
    }

    /// Number of recorded steps (the scalar bit width).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The recorded steps, most significant bit first.
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.records.iter()
    }

    /// Renders every step as an export row.
    pub fn rows(&self) -> Vec<TraceRow> {
        self.records.iter().map(StepRecord::to_row).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl StepRecord {
    /// Flattens the record into the exporter row contract. Coordinates
    /// are rendered as zero-padded 64-character hex strings.
    pub fn to_row(&self) -> TraceRow {
        let (point_x_hex, point_y_hex) = match &self.point {
            Point::Identity => (None, None),
            Point::Affine { x, y } => (Some(format!("{x:064x}")), Some(format!("{y:064x}"))),
        };

        TraceRow {
            step_number: self.step_number,
            bit: if self.bit == 1 { '1' } else { '0' },
            operation: self.operation.to_string(),
            point_x_hex,
            point_y_hex,
            angle: self.angle,
            symbol: self.symbol,
            symbol_delta: self.symbol_delta,
        }
    }
}
