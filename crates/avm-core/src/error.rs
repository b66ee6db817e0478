//! AVM Error Types
//!
//! Defines every error condition produced by the abstract machine.
//! All of them are language-level failures: the run loop reports the first
//! one with its source line and stops.

use std::io;

use thiserror::Error;

use crate::instruction::opcode::OpCode;
use crate::operand::arith::BinaryOp;
use crate::operand::kind::PrecisionKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VmError {
    // Stack errors
    #[error("{op} requires {required} value(s) on the stack, found {found}")]
    StackUnderflow {
        op: OpCode,
        required: usize,
        found: usize,
    },

    #[error("stack overflow: limit of {limit} value(s) reached")]
    StackOverflow { limit: usize },

    #[error("assertion failed: expected {expected}, found {actual}")]
    AssertionFailed { expected: String, actual: String },

    #[error("print expects an int8 on top of the stack, found {0}")]
    PrintTypeMismatch(PrecisionKind),

    // Arithmetic errors
    #[error("overflow: {op} exceeds the {kind} range")]
    Overflow { op: BinaryOp, kind: PrecisionKind },

    #[error("underflow: {op} falls below the {kind} range")]
    Underflow { op: BinaryOp, kind: PrecisionKind },

    #[error("division by zero in {0}")]
    DivisionByZero(BinaryOp),

    // Operand construction errors
    #[error("invalid operand kind tag: {0}")]
    InvalidOperandKind(u8),

    #[error("invalid {kind} literal: {literal}")]
    InvalidLiteral { kind: PrecisionKind, literal: String },

    #[error("{kind} literal out of range: {literal}")]
    LiteralOutOfRange { kind: PrecisionKind, literal: String },

    // Instruction source errors
    #[error("unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("malformed value: {0}")]
    MalformedValue(String),

    #[error("{0} requires a value")]
    MissingOperand(OpCode),

    #[error("{0} takes no value")]
    UnexpectedOperand(OpCode),

    // IO boundary
    #[error("io error: {0}")]
    Io(String),
}

impl From<io::Error> for VmError {
    fn from(err: io::Error) -> Self {
        VmError::Io(err.to_string())
    }
}

pub type VmResult<T> = Result<T, VmError>;

/// An error tagged with the 1-based line of the instruction that raised it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Line {line} : Error : {error}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub error: VmError,
}

impl LineError {
    pub fn new(line: usize, error: VmError) -> Self {
        LineError { line, error }
    }
}
