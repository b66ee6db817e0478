//! Instruction Opcode Definitions
//!
//! Defines the fixed instruction set of the abstract machine.
//! This file contains no execution semantics.

use std::fmt;

/// Instruction tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpCode {
    // Stack operations
    Push,
    Pop,
    Dump,
    Assert,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Output
    Print,

    // System
    Exit,
}

impl OpCode {
    /// Every opcode, in declaration order
    pub const ALL: [OpCode; 11] = [
        OpCode::Push,
        OpCode::Pop,
        OpCode::Dump,
        OpCode::Assert,
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mul,
        OpCode::Div,
        OpCode::Mod,
        OpCode::Print,
        OpCode::Exit,
    ];

    /// Textual mnemonic as written in program source
    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Push => "push",
            OpCode::Pop => "pop",
            OpCode::Dump => "dump",
            OpCode::Assert => "assert",
            OpCode::Add => "add",
            OpCode::Sub => "sub",
            OpCode::Mul => "mul",
            OpCode::Div => "div",
            OpCode::Mod => "mod",
            OpCode::Print => "print",
            OpCode::Exit => "exit",
        }
    }

    /// Convert a mnemonic to an opcode
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.mnemonic() == name)
    }

    /// Whether the instruction carries a typed literal
    pub fn takes_operand(self) -> bool {
        matches!(self, OpCode::Push | OpCode::Assert)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
