//! Greeter Module
//!
//! Formats a greeting from a name and an age. Every response carries the
//! `greet-version: v1` header.
//!
//! External consumers should use the `greeter-sdk` crate.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod module;
pub use module::GreeterModule;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
