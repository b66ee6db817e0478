pub mod instruction;
pub mod opcode;

pub use instruction::{Instruction, Literal};
pub use opcode::OpCode;
