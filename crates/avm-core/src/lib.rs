//! Abstract VM - Core Library
//!
//! Public API surface for the typed stack machine.

pub mod error;
pub mod config;
pub mod instruction;
pub mod operand;
pub mod vm;
pub mod loader;

// Re-export commonly used types
pub use error::{LineError, VmError, VmResult};
pub use config::VmConfig;
pub use instruction::{Instruction, Literal, OpCode};
pub use operand::{BinaryOp, Number, Operand, OperandFactory, PrecisionKind};
pub use vm::{ExitStatus, StackMachine};
pub use loader::{InstructionSource, Program, TextSource};
