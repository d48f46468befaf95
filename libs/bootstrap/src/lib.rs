//! Process bootstrap shared by the server binary.
//!
//! - `config`: layered configuration (defaults, YAML, `APP__*` environment)
//! - `logging`: global `tracing` subscriber
//! - `signals`: Ctrl+C / SIGTERM to `CancellationToken`

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod logging;
pub mod signals;

pub use config::*;
pub use logging::*;
pub use signals::*;
