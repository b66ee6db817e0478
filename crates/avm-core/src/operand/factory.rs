//! Operand Factory
//!
//! Builds operands from literal text. No range validation happens here:
//! instruction sources only hand over literals that fit their kind.

use std::str::FromStr;

use crate::error::{VmError, VmResult};

use super::kind::PrecisionKind;
use super::value::{Number, Operand};

pub struct OperandFactory;

impl OperandFactory {
    /// Build an operand of `kind` from its literal text
    pub fn create(kind: PrecisionKind, literal: &str) -> VmResult<Operand> {
        let value = match kind {
            PrecisionKind::Int8 => Number::Int8(Self::parse(kind, literal)?),
            PrecisionKind::Int16 => Number::Int16(Self::parse(kind, literal)?),
            PrecisionKind::Int32 => Number::Int32(Self::parse(kind, literal)?),
            PrecisionKind::Float => Number::Float(Self::parse(kind, literal)?),
            PrecisionKind::Double => Number::Double(Self::parse(kind, literal)?),
        };
        Ok(Operand::new(value))
    }

    /// Build an operand from a raw kind tag
    pub fn create_tagged(tag: u8, literal: &str) -> VmResult<Operand> {
        Self::create(PrecisionKind::from_tag(tag)?, literal)
    }

    fn parse<T: FromStr>(kind: PrecisionKind, literal: &str) -> VmResult<T> {
        literal.parse().map_err(|_| VmError::InvalidLiteral {
            kind,
            literal: literal.to_string(),
        })
    }
}
