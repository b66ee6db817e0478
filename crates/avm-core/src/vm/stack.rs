//! Operand Stack Implementation
//!
//! LIFO storage owning its operands by value.
//! No execution semantics.

use crate::error::{VmError, VmResult};
use crate::operand::value::Operand;

/// VM operand stack
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<Operand>,
    max_size: Option<usize>,
}

impl Stack {
    /// Create new stack, optionally bounded
    pub fn new(max_size: Option<usize>) -> Self {
        Stack {
            values: Vec::new(),
            max_size,
        }
    }

    /// Push operand onto stack
    pub fn push(&mut self, value: Operand) -> VmResult<()> {
        if let Some(limit) = self.max_size {
            if self.values.len() >= limit {
                return Err(VmError::StackOverflow { limit });
            }
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop operand from stack
    pub fn pop(&mut self) -> Option<Operand> {
        self.values.pop()
    }

    /// Pop the top two operands as `(top, below)`; leaves the stack untouched
    /// when it holds fewer than two
    pub fn pop_pair(&mut self) -> Option<(Operand, Operand)> {
        if self.values.len() < 2 {
            return None;
        }
        let top = self.values.pop()?;
        let below = self.values.pop()?;
        Some((top, below))
    }

    /// Peek at top of stack without removing
    pub fn peek(&self) -> Option<&Operand> {
        self.values.last()
    }

    /// Operands from top to bottom
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Operand> {
        self.values.iter().rev()
    }

    /// Get current stack size
    pub fn size(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operand::value::Number;

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new(None);
        stack.push(Operand::new(Number::Int8(1))).unwrap();
        stack.push(Operand::new(Number::Int8(2))).unwrap();

        let texts: Vec<&str> = stack.iter_top_down().map(Operand::text).collect();
        assert_eq!(texts, ["2", "1"]);
        assert_eq!(stack.pop().map(|op| op.value()), Some(Number::Int8(2)));
        assert_eq!(stack.size(), 1);
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_none());
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn bounded_stack_rejects_overflow() {
        let mut stack = Stack::new(Some(1));
        stack.push(Operand::new(Number::Int8(1))).unwrap();
        assert_eq!(
            stack.push(Operand::new(Number::Int8(2))),
            Err(VmError::StackOverflow { limit: 1 })
        );
        assert_eq!(stack.size(), 1);
    }
}
