//! Calculator Module
//!
//! Stateless arithmetic service: add, subtract, multiply or divide two `f64`
//! operands. Division by zero and unsupported operations are rejected with
//! `INVALID_ARGUMENT`.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `api/grpc/server.rs` - gRPC server implementation and wire mapping
//! - `module.rs` - Module registration with the gRPC hub
//!
//! External consumers should use the `calculator-sdk` crate.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
