//! Greeter API trait and types

use async_trait::async_trait;

use crate::models::Greeting;

/// Greeter API trait
#[async_trait]
pub trait GreeterClientV1: Send + Sync {
    /// Greet `name`; `age` is echoed back unvalidated.
    ///
    /// # Errors
    /// The mapped status if the call fails, `GreeterError::Internal`
    /// if the version header is not valid ASCII.
    async fn greet(&self, name: &str, age: i32) -> Result<Greeting, GreeterError>;
}

/// Error type for Greeter operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GreeterError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("gRPC transport error: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tonic::Status> for GreeterError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::InvalidArgument => Self::InvalidArgument(status.message().to_owned()),
            _ => Self::Transport(status.message().to_owned()),
        }
    }
}
