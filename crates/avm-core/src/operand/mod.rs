pub mod arith;
pub mod factory;
pub mod kind;
pub mod value;

pub use arith::BinaryOp;
pub use factory::OperandFactory;
pub use kind::PrecisionKind;
pub use value::{Number, Operand};
