//! Domain error types for the calculator module.

use thiserror::Error;

/// Caller-fault errors raised while evaluating an operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Divide with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The requested operation is unspecified or unknown.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl DomainError {
    /// Creates an `UnsupportedOperation` error naming the offending value.
    #[must_use]
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedOperation(name.into())
    }
}
