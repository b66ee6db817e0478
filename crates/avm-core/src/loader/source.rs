//! Instruction Sources
//!
//! The stack machine pulls instructions one at a time from an
//! `InstructionSource`. Sources report the line of the instruction they
//! returned last, which is what errors are tagged with.

use crate::error::VmResult;
use crate::instruction::{Instruction, OpCode};

pub trait InstructionSource {
    /// Advance to the next instruction; yields `exit` once the program ends
    fn next_instruction(&mut self) -> VmResult<Instruction>;

    /// 1-based line of the most recently returned instruction
    fn line_number(&self) -> usize;
}

impl<S: InstructionSource + ?Sized> InstructionSource for Box<S> {
    fn next_instruction(&mut self) -> VmResult<Instruction> {
        (**self).next_instruction()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}

impl<S: InstructionSource + ?Sized> InstructionSource for &mut S {
    fn next_instruction(&mut self) -> VmResult<Instruction> {
        (**self).next_instruction()
    }

    fn line_number(&self) -> usize {
        (**self).line_number()
    }
}

/// In-memory program; instruction `i` sits on line `i + 1`
#[derive(Debug, Clone, Default)]
pub struct Program {
    instructions: Vec<Instruction>,
    position: usize,
}

impl Program {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Program {
            instructions,
            position: 0,
        }
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Program::new(iter.into_iter().collect())
    }
}

impl InstructionSource for Program {
    fn next_instruction(&mut self) -> VmResult<Instruction> {
        match self.instructions.get(self.position) {
            Some(instruction) => {
                self.position += 1;
                Ok(instruction.clone())
            }
            None => Ok(Instruction::new(OpCode::Exit)),
        }
    }

    fn line_number(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::kind::PrecisionKind;

    #[test]
    fn program_reports_lines_and_ends_with_exit() {
        let mut program: Program = vec![
            Instruction::push(PrecisionKind::Int8, "1"),
            Instruction::new(OpCode::Pop),
        ]
        .into_iter()
        .collect();

        assert_eq!(program.next_instruction().unwrap().opcode, OpCode::Push);
        assert_eq!(program.line_number(), 1);
        assert_eq!(program.next_instruction().unwrap().opcode, OpCode::Pop);
        assert_eq!(program.line_number(), 2);
        assert_eq!(program.next_instruction().unwrap().opcode, OpCode::Exit);
        assert_eq!(program.next_instruction().unwrap().opcode, OpCode::Exit);
    }
}
