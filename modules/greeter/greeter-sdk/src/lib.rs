//! Greeter SDK
//!
//! - API trait (`GreeterClientV1`) and models (`Greeting`)
//! - Error types (`GreeterError`)
//! - gRPC client (`GreeterGrpcClient`)
//! - Proto stubs for server implementation

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
mod models;
pub use api::{GreeterClientV1, GreeterError};
pub use models::Greeting;

// === GRPC CLIENT ===
mod client;
pub use client::GreeterGrpcClient;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `GreetService`
pub mod proto {
    tonic::include_proto!("greet.v1");
}

pub use proto::greet_service_server::{GreetService, GreetServiceServer};
pub use proto::{GreetRequest, GreetResponse};

/// Service name constant for `GreetService` (used for routing and logs)
pub const SERVICE_NAME: &str = "greet.v1.GreetService";

/// Response metadata key carrying the service version.
pub const GREET_VERSION_HEADER: &str = "greet-version";

/// Value of [`GREET_VERSION_HEADER`] sent by this service.
pub const GREET_VERSION: &str = "v1";
