//! Domain layer for greeter module

pub mod service;

pub use service::{Greeting, Service};
