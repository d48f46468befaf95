//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator service:
//! - API trait (`CalculatorClientV1`)
//! - Error types (`CalculatorError`)
//! - gRPC client (`CalculatorGrpcClient`)
//! - Proto stubs for server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, CalculatorGrpcClient, Operation};
//!
//! let client = CalculatorGrpcClient::connect("http://127.0.0.1:8080").await?;
//! let result = client.operate(10.0, 5.0, Operation::Divide).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorClientV1, CalculatorError};

// === GRPC CLIENT ===
mod client;
pub use client::CalculatorGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `CalculatorService`
pub mod proto {
    tonic::include_proto!("calculator.v1");
}

// Re-export proto types needed by server
pub use proto::calculator_service_server::{CalculatorService, CalculatorServiceServer};
pub use proto::{OperateRequest, OperateResponse, Operation};

/// Service name constant for `CalculatorService` (used for routing and logs)
pub const SERVICE_NAME: &str = "calculator.v1.CalculatorService";
