//! Domain service for greeter

use tracing::debug;

/// Result of a greet call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub greeting: String,
    pub age: i32,
}

/// Stateless greeting service.
#[derive(Clone, Debug, Default)]
pub struct Service;

impl Service {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Build the greeting. Inputs are not validated; `age` is echoed unchanged.
    #[must_use]
    pub fn greet(&self, name: &str, age: i32) -> Greeting {
        debug!(name, age, "building greeting");
        Greeting {
            greeting: format!("Hello, {name}! You are {age} years old."),
            age,
        }
    }
}
