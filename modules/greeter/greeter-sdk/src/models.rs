//! Models returned by the greeter client

/// A greeting as returned to SDK consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub greeting: String,
    /// The age exactly as sent in the request.
    pub age: i32,
    /// Value of the `greet-version` response header, if the server sent one.
    pub version: Option<String>,
}
