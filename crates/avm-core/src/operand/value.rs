//! Operand Value Representation
//!
//! An immutable typed number paired with its canonical text.
//! The text is computed once at construction and is what `dump` prints and
//! `assert` compares.

use std::fmt;

use super::kind::PrecisionKind;

/// Native numeric payload, one variant per precision kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Float(f32),
    Double(f64),
}

impl Number {
    pub fn kind(self) -> PrecisionKind {
        match self {
            Number::Int8(_) => PrecisionKind::Int8,
            Number::Int16(_) => PrecisionKind::Int16,
            Number::Int32(_) => PrecisionKind::Int32,
            Number::Float(_) => PrecisionKind::Float,
            Number::Double(_) => PrecisionKind::Double,
        }
    }

    /// Canonical decimal rendering.
    ///
    /// Floats use the shortest round-trip form, which always keeps a
    /// fractional part or exponent (`5.0`, `0.1`, `1e20`).
    pub fn canonical_text(self) -> String {
        match self {
            Number::Int8(v) => v.to_string(),
            Number::Int16(v) => v.to_string(),
            Number::Int32(v) => v.to_string(),
            Number::Float(v) => format!("{:?}", v),
            Number::Double(v) => format!("{:?}", v),
        }
    }
}

/// Stack operand
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    value: Number,
    text: String,
}

impl Operand {
    pub fn new(value: Number) -> Self {
        Operand {
            text: value.canonical_text(),
            value,
        }
    }

    pub fn kind(&self) -> PrecisionKind {
        self.value.kind()
    }

    pub fn value(&self) -> Number {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        Operand::new(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
