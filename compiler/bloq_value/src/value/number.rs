//! Width-preserving numeric view over `Value`.
//!
//! Integers of different signedness are compared exactly. Floats are
//! compared after converting the other side to `f64`.

use std::cmp::Ordering;
use std::fmt;

/// A numeric value of one of the three physical widths.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// Lossy conversion to `f64`, used once either side is floating.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Float promotion is the documented widening rule"
    )]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::UInt(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    /// True for integer zero and for both signed float zeros.
    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(n) => n == 0,
            Number::UInt(n) => n == 0,
            Number::Float(n) => n == 0.0,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Orders two numbers across widths. `None` only when a NaN is involved.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::UInt(a), Number::UInt(b)) => Some(a.cmp(&b)),
            (Number::Int(a), Number::UInt(b)) => Some(compare_signed_unsigned(a, b)),
            (Number::UInt(a), Number::Int(b)) => Some(compare_signed_unsigned(b, a).reverse()),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

fn compare_signed_unsigned(signed: i64, unsigned: u64) -> Ordering {
    match u64::try_from(signed) {
        Ok(widened) => widened.cmp(&unsigned),
        Err(_) => Ordering::Less,
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::UInt(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}
