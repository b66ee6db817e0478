//! Stack Machine Core
//!
//! Pulls instructions from a source and executes them against the operand
//! stack. The first error halts the run and is reported with its line.

use std::io::Write;

use tracing::{debug, trace, warn};

use crate::config::VmConfig;
use crate::error::{LineError, VmError, VmResult};
use crate::instruction::{Instruction, OpCode};
use crate::loader::source::InstructionSource;
use crate::operand::arith::{self, BinaryOp};
use crate::operand::factory::OperandFactory;
use crate::operand::value::{Number, Operand};

use super::stack::Stack;

/// Outcome of a complete run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Process exit code
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

/// Abstract stack machine
#[derive(Debug)]
pub struct StackMachine<S> {
    config: VmConfig,
    stack: Stack,
    source: S,
    halted: bool,
}

impl<S: InstructionSource> StackMachine<S> {
    /// Create a new machine with an empty stack
    pub fn new(config: VmConfig, source: S) -> Self {
        StackMachine {
            stack: Stack::new(config.max_stack_size),
            source,
            halted: false,
            config,
        }
    }

    /// Run the program, writing the failure line (if any) to `err`
    pub fn run<O: Write, E: Write>(&mut self, out: &mut O, err: &mut E) -> ExitStatus {
        match self.execute(out) {
            Ok(()) => ExitStatus::Success,
            Err(failure) => {
                if let Err(io) = writeln!(err, "{}", failure) {
                    warn!(error = %io, "could not report failure");
                }
                ExitStatus::Failure
            }
        }
    }

    /// Execute until `exit`, end of program, or the first error
    pub fn execute<W: Write>(&mut self, out: &mut W) -> Result<(), LineError> {
        debug!(max_stack_size = ?self.config.max_stack_size, "run started");

        let result = self.drive(out);
        let flushed = out.flush().map_err(VmError::from);

        match result.and(flushed) {
            Ok(()) => {
                debug!(depth = self.stack.size(), "run finished");
                Ok(())
            }
            Err(error) => {
                let line = self.source.line_number();
                debug!(line, %error, "run failed");
                Err(LineError::new(line, error))
            }
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn peek_top(&self) -> Option<&Operand> {
        self.stack.peek()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    fn drive<W: Write>(&mut self, out: &mut W) -> VmResult<()> {
        while !self.halted {
            self.step(out)?;
        }
        Ok(())
    }

    /// Fetch and execute a single instruction
    fn step<W: Write>(&mut self, out: &mut W) -> VmResult<()> {
        let instruction = self.source.next_instruction()?;
        trace!(
            line = self.source.line_number(),
            opcode = %instruction.opcode,
            depth = self.stack.size(),
            "dispatch"
        );

        match instruction.opcode {
            OpCode::Push => {
                let operand = Self::build_operand(&instruction)?;
                self.stack.push(operand)
            }
            OpCode::Pop => self.pop(),
            OpCode::Dump => self.dump(out),
            OpCode::Assert => self.assert(&instruction),

            OpCode::Add => self.binary(OpCode::Add, BinaryOp::Add),
            OpCode::Sub => self.binary(OpCode::Sub, BinaryOp::Sub),
            OpCode::Mul => self.binary(OpCode::Mul, BinaryOp::Mul),
            OpCode::Div => self.binary(OpCode::Div, BinaryOp::Div),
            OpCode::Mod => self.binary(OpCode::Mod, BinaryOp::Mod),

            OpCode::Print => self.print(out),
            OpCode::Exit => {
                self.halted = true;
                Ok(())
            }
        }
    }

    fn build_operand(instruction: &Instruction) -> VmResult<Operand> {
        let literal = instruction
            .operand
            .as_ref()
            .ok_or(VmError::MissingOperand(instruction.opcode))?;
        OperandFactory::create(literal.kind, &literal.text)
    }

    fn underflow(&self, op: OpCode, required: usize) -> VmError {
        VmError::StackUnderflow {
            op,
            required,
            found: self.stack.size(),
        }
    }

    fn pop(&mut self) -> VmResult<()> {
        match self.stack.pop() {
            Some(_) => Ok(()),
            None => Err(self.underflow(OpCode::Pop, 1)),
        }
    }

    fn dump<W: Write>(&self, out: &mut W) -> VmResult<()> {
        for operand in self.stack.iter_top_down() {
            writeln!(out, "{}", operand)?;
        }
        Ok(())
    }

    fn assert(&self, instruction: &Instruction) -> VmResult<()> {
        let expected = Self::build_operand(instruction)?;
        let actual = match self.stack.peek() {
            Some(top) if top.text() == expected.text() => return Ok(()),
            Some(top) => top.text().to_string(),
            None => "empty stack".to_string(),
        };
        Err(VmError::AssertionFailed {
            expected: expected.text().to_string(),
            actual,
        })
    }

    /// Pops `first` (top) then `second`, computes `second op first`
    fn binary(&mut self, opcode: OpCode, op: BinaryOp) -> VmResult<()> {
        let (first, second) = self
            .stack
            .pop_pair()
            .ok_or_else(|| self.underflow(opcode, 2))?;
        let result = arith::apply(op, &second, &first)?;
        self.stack.push(result)
    }

    fn print<W: Write>(&self, out: &mut W) -> VmResult<()> {
        let top = self
            .stack
            .peek()
            .ok_or_else(|| self.underflow(OpCode::Print, 1))?;
        match top.value() {
            Number::Int8(v) => {
                out.write_all(&[v as u8])?;
                Ok(())
            }
            other => Err(VmError::PrintTypeMismatch(other.kind())),
        }
    }
}
