//! Instruction Representation
//!
//! An opcode plus the typed literal carried by `push` and `assert`.
//! This layer contains no execution semantics.

use crate::operand::kind::PrecisionKind;

use super::opcode::OpCode;

/// Typed literal as handed over by an instruction source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub kind: PrecisionKind,
    pub text: String,
}

impl Literal {
    pub fn new(kind: PrecisionKind, text: impl Into<String>) -> Self {
        Literal {
            kind,
            text: text.into(),
        }
    }
}

/// Single instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: OpCode,
    pub operand: Option<Literal>,
}

impl Instruction {
    /// Create an instruction with no operand
    pub fn new(opcode: OpCode) -> Self {
        Instruction {
            opcode,
            operand: None,
        }
    }

    /// Create an instruction carrying a literal
    pub fn with_operand(opcode: OpCode, operand: Literal) -> Self {
        Instruction {
            opcode,
            operand: Some(operand),
        }
    }

    /// `push <kind>(<text>)`
    pub fn push(kind: PrecisionKind, text: impl Into<String>) -> Self {
        Self::with_operand(OpCode::Push, Literal::new(kind, text))
    }

    /// `assert <kind>(<text>)`
    pub fn assert(kind: PrecisionKind, text: impl Into<String>) -> Self {
        Self::with_operand(OpCode::Assert, Literal::new(kind, text))
    }
}
