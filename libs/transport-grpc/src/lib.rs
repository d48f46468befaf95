#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
//! Client-side gRPC transport helpers.
//!
//! Services in this workspace are unary and their errors are terminal for a
//! request, so the stack only covers connection setup: timeouts, HTTP/2
//! keepalive and a tracing span around the connect.

pub mod client;

pub use client::{GrpcClientConfig, connect_with_stack};
