//! Calculator API trait and types

use async_trait::async_trait;

use crate::proto::Operation;

/// Calculator API trait
///
/// Performs one of four binary operations on two `f64` operands.
#[async_trait]
pub trait CalculatorClientV1: Send + Sync {
    /// Apply `operation` to `a` and `b`.
    ///
    /// `Operation::Unspecified` is sent as-is and rejected by the server.
    ///
    /// # Errors
    /// `CalculatorError::InvalidArgument` for division by zero or an
    /// unsupported operation; `CalculatorError::Transport` for any other status.
    async fn operate(&self, a: f64, b: f64, operation: Operation) -> Result<f64, CalculatorError>;
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The server rejected the request content (division by zero, unsupported operation).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),
}

impl CalculatorError {
    /// `true` for caller-fault errors raised by the calculator itself.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<tonic::Status> for CalculatorError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::InvalidArgument => Self::InvalidArgument(status.message().to_owned()),
            _ => Self::Transport(status.message().to_owned()),
        }
    }
}
