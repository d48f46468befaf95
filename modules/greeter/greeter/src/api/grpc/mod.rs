//! gRPC API layer for the greeter module

mod server;

pub use server::GreeterServiceImpl;
