pub mod loader;
pub mod source;

pub use loader::TextSource;
pub use source::{InstructionSource, Program};
