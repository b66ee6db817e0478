//! AVM Configuration
//!
//! Defines runtime limits for the stack machine.
//! Configuration specifies constraints only; enforcement is handled by the VM.

/// VM Configuration
#[derive(Debug, Clone, Default)]
pub struct VmConfig {
    /// Maximum operand stack depth (`None` means unbounded)
    pub max_stack_size: Option<usize>,
}

impl VmConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with a bounded operand stack
    pub fn with_max_stack_size(max_stack_size: usize) -> Self {
        VmConfig {
            max_stack_size: Some(max_stack_size),
        }
    }
}
