//! Text Program Loader
//!
//! Streams assembly text line by line and validates each instruction before
//! handing it to the machine. One instruction per line, `;` starts a
//! comment, and in interactive mode a `;;` line ends the program.
//!
//! Literals are range-checked here, so every operand that reaches the
//! factory fits its kind.

use std::io::BufRead;

use tracing::trace;

use crate::error::{VmError, VmResult};
use crate::instruction::{Instruction, Literal, OpCode};
use crate::operand::factory::OperandFactory;
use crate::operand::kind::PrecisionKind;
use crate::operand::value::Number;

use super::source::InstructionSource;

/// Terminates a program typed on standard input
const INTERACTIVE_END: &str = ";;";

const COMMENT: char = ';';

/// Line-oriented instruction source over any buffered reader
#[derive(Debug)]
pub struct TextSource<R> {
    reader: R,
    buffer: String,
    line: usize,
    interactive: bool,
    finished: bool,
}

impl<R: BufRead> TextSource<R> {
    /// Read a program file; the program ends at end of input
    pub fn new(reader: R) -> Self {
        TextSource {
            reader,
            buffer: String::new(),
            line: 0,
            interactive: false,
            finished: false,
        }
    }

    /// Read a program typed interactively; a `;;` line also ends it
    pub fn interactive(reader: R) -> Self {
        TextSource {
            interactive: true,
            ..Self::new(reader)
        }
    }

    fn exit(&mut self) -> Instruction {
        self.finished = true;
        Instruction::new(OpCode::Exit)
    }
}

impl<R: BufRead> InstructionSource for TextSource<R> {
    fn next_instruction(&mut self) -> VmResult<Instruction> {
        if self.finished {
            return Ok(Instruction::new(OpCode::Exit));
        }

        loop {
            self.buffer.clear();
            // Counted before reading so an unreadable line reports itself
            self.line += 1;
            if self.reader.read_line(&mut self.buffer)? == 0 {
                self.line -= 1;
                return Ok(self.exit());
            }

            let raw = self.buffer.trim_end_matches(['\n', '\r']);
            if self.interactive && raw.trim() == INTERACTIVE_END {
                return Ok(self.exit());
            }

            if let Some(instruction) = parse_line(raw)? {
                trace!(line = self.line, opcode = %instruction.opcode, "parsed");
                if instruction.opcode == OpCode::Exit {
                    self.finished = true;
                }
                return Ok(instruction);
            }
        }
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

/// Parse one source line; blank and comment-only lines yield `None`
pub fn parse_line(line: &str) -> VmResult<Option<Instruction>> {
    let code = match line.find(COMMENT) {
        Some(start) => &line[..start],
        None => line,
    };

    let mut tokens = code.split_whitespace();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };

    let opcode = OpCode::from_mnemonic(name)
        .ok_or_else(|| VmError::UnknownInstruction(name.to_string()))?;

    let value = tokens.next();
    if let Some(extra) = tokens.next() {
        return Err(VmError::MalformedValue(extra.to_string()));
    }

    let instruction = match (opcode.takes_operand(), value) {
        (true, Some(text)) => Instruction::with_operand(opcode, parse_value(text)?),
        (true, None) => return Err(VmError::MissingOperand(opcode)),
        (false, Some(_)) => return Err(VmError::UnexpectedOperand(opcode)),
        (false, None) => Instruction::new(opcode),
    };
    Ok(Some(instruction))
}

/// Parse `kind(number)` into a validated literal
pub fn parse_value(text: &str) -> VmResult<Literal> {
    let malformed = || VmError::MalformedValue(text.to_string());

    let (name, rest) = text.split_once('(').ok_or_else(malformed)?;
    let digits = rest.strip_suffix(')').ok_or_else(malformed)?;
    let kind = PrecisionKind::from_name(name).ok_or_else(malformed)?;

    if !is_decimal(digits, !kind.is_integer()) {
        return Err(malformed());
    }
    check_range(kind, digits)?;

    Ok(Literal::new(kind, digits))
}

/// `[-]?[0-9]+`, optionally followed by `.[0-9]+` when fractions are allowed
fn is_decimal(text: &str, allow_fraction: bool) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) if allow_fraction => (whole, Some(fraction)),
        Some(_) => return false,
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

fn check_range(kind: PrecisionKind, digits: &str) -> VmResult<()> {
    let out_of_range = || VmError::LiteralOutOfRange {
        kind,
        literal: digits.to_string(),
    };

    // Digits are well-formed, so a failed conversion means the value does not fit
    let operand = OperandFactory::create(kind, digits).map_err(|_| out_of_range())?;
    match operand.value() {
        Number::Float(v) if !v.is_finite() => Err(out_of_range()),
        Number::Double(v) if !v.is_finite() => Err(out_of_range()),
        _ => Ok(()),
    }
}
