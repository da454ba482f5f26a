use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation,
    InvalidTransition,
    InvalidState,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation => write!(f, "Record violates a structural invariant"),
            KernelError::InvalidTransition => {
                write!(f, "Operation is not permitted from the current status")
            }
            KernelError::InvalidState => write!(f, "Required data is missing for this operation"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
