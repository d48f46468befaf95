//! gRPC API layer for the calculator module

mod server;

pub use server::{CalculatorServiceImpl, operation_from_wire};
