//! Arithmetic Engine
//!
//! Promotes both operands to the wider kind, then computes in that kind's
//! native type. Integer results are range-checked before they exist; float
//! multiplication fails when the product is infinite.

use std::fmt;

use tracing::trace;

use crate::error::{VmError, VmResult};

use super::kind::PrecisionKind;
use super::value::{Number, Operand};

/// Binary arithmetic operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Mod => "mod",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure of a single native operation, before it is tied to op and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fault {
    Overflow,
    Underflow,
    DivisionByZero,
}

/// Native numeric type backing one precision kind
trait Native: Copy {
    fn from_number(value: Number) -> Self;
    fn into_number(self) -> Number;

    fn add(self, rhs: Self) -> Result<Self, Fault>;
    fn sub(self, rhs: Self) -> Result<Self, Fault>;
    fn mul(self, rhs: Self) -> Result<Self, Fault>;
    fn div(self, rhs: Self) -> Result<Self, Fault>;
    fn rem(self, rhs: Self) -> Result<Self, Fault>;
}

macro_rules! impl_native_integer {
    ($t:ty, $variant:ident) => {
        impl Native for $t {
            // Values only ever widen here; the narrowing arms are unreachable.
            fn from_number(value: Number) -> Self {
                match value {
                    Number::Int8(v) => v as $t,
                    Number::Int16(v) => v as $t,
                    Number::Int32(v) => v as $t,
                    Number::Float(v) => v as $t,
                    Number::Double(v) => v as $t,
                }
            }

            fn into_number(self) -> Number {
                Number::$variant(self)
            }

            fn add(self, rhs: Self) -> Result<Self, Fault> {
                self.checked_add(rhs).ok_or(if rhs > 0 {
                    Fault::Overflow
                } else {
                    Fault::Underflow
                })
            }

            fn sub(self, rhs: Self) -> Result<Self, Fault> {
                self.checked_sub(rhs).ok_or(if rhs > 0 {
                    Fault::Underflow
                } else {
                    Fault::Overflow
                })
            }

            fn mul(self, rhs: Self) -> Result<Self, Fault> {
                self.checked_mul(rhs).ok_or(if (self > 0) == (rhs > 0) {
                    Fault::Overflow
                } else {
                    Fault::Underflow
                })
            }

            fn div(self, rhs: Self) -> Result<Self, Fault> {
                if rhs == 0 {
                    return Err(Fault::DivisionByZero);
                }
                // MIN / -1 is the one quotient outside the range
                self.checked_div(rhs).ok_or(Fault::Overflow)
            }

            fn rem(self, rhs: Self) -> Result<Self, Fault> {
                if rhs == 0 {
                    return Err(Fault::DivisionByZero);
                }
                Ok(self.wrapping_rem(rhs))
            }
        }
    };
}

/// Float kinds only fail on division by zero and on an infinite product.
/// Sums, differences and quotients are returned as computed, so they may
/// carry `inf` onto the stack.
macro_rules! impl_native_float {
    ($t:ty, $variant:ident) => {
        impl Native for $t {
            fn from_number(value: Number) -> Self {
                match value {
                    Number::Int8(v) => v as $t,
                    Number::Int16(v) => v as $t,
                    Number::Int32(v) => v as $t,
                    Number::Float(v) => v as $t,
                    Number::Double(v) => v as $t,
                }
            }

            fn into_number(self) -> Number {
                Number::$variant(self)
            }

            fn add(self, rhs: Self) -> Result<Self, Fault> {
                Ok(self + rhs)
            }

            fn sub(self, rhs: Self) -> Result<Self, Fault> {
                Ok(self - rhs)
            }

            fn mul(self, rhs: Self) -> Result<Self, Fault> {
                let product = self * rhs;
                if product.is_infinite() {
                    return Err(Fault::Overflow);
                }
                Ok(product)
            }

            fn div(self, rhs: Self) -> Result<Self, Fault> {
                if rhs == 0.0 {
                    return Err(Fault::DivisionByZero);
                }
                Ok(self / rhs)
            }

            // `%` on floats is fmod: truncated, sign of the dividend
            fn rem(self, rhs: Self) -> Result<Self, Fault> {
                if rhs == 0.0 {
                    return Err(Fault::DivisionByZero);
                }
                Ok(self % rhs)
            }
        }
    };
}

impl_native_integer!(i8, Int8);
impl_native_integer!(i16, Int16);
impl_native_integer!(i32, Int32);
impl_native_float!(f32, Float);
impl_native_float!(f64, Double);

/// Apply `op` to `left` and `right`, producing a new operand of the promoted kind
pub fn apply(op: BinaryOp, left: &Operand, right: &Operand) -> VmResult<Operand> {
    let kind = left.kind().promote(right.kind());
    trace!(%op, %kind, left = %left, right = %right, "arithmetic");

    let result = match kind {
        PrecisionKind::Int8 => compute::<i8>(op, left, right),
        PrecisionKind::Int16 => compute::<i16>(op, left, right),
        PrecisionKind::Int32 => compute::<i32>(op, left, right),
        PrecisionKind::Float => compute::<f32>(op, left, right),
        PrecisionKind::Double => compute::<f64>(op, left, right),
    };

    result.map(Operand::new).map_err(|fault| match fault {
        Fault::Overflow => VmError::Overflow { op, kind },
        Fault::Underflow => VmError::Underflow { op, kind },
        Fault::DivisionByZero => VmError::DivisionByZero(op),
    })
}

fn compute<T: Native>(op: BinaryOp, left: &Operand, right: &Operand) -> Result<Number, Fault> {
    let l = T::from_number(left.value());
    let r = T::from_number(right.value());

    let result = match op {
        BinaryOp::Add => l.add(r)?,
        BinaryOp::Sub => l.sub(r)?,
        BinaryOp::Mul => l.mul(r)?,
        BinaryOp::Div => l.div(r)?,
        BinaryOp::Mod => l.rem(r)?,
    };
    Ok(result.into_number())
}
