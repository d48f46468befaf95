//! Configuration for the gRPC hub and its CORS policy.

use serde::{Deserialize, Serialize};

/// Default listen address: loopback, port 8080.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Configuration for the gRPC hub.
///
/// `listen_addr` supports:
/// - TCP: `"127.0.0.1:8080"` or `"127.0.0.1:0"` for an ephemeral port
/// - Unix Domain Socket (Unix only): `"uds:///path/to/socket.sock"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrpcHubConfig {
    pub listen_addr: String,
}

impl Default for GrpcHubConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
        }
    }
}

/// Cross-origin policy applied in front of every gRPC route.
///
/// Defaults allow the local web frontend on `http://localhost:3001`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
    /// Allowed methods; `"*"` allows any method.
    pub allowed_methods: Vec<String>,
    /// Allowed request headers; `"*"` allows any header.
    pub allowed_headers: Vec<String>,
    /// Response headers exposed to the browser.
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Preflight cache lifetime. `0` omits the header.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3001".to_owned()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            allowed_headers: [
                "Accept",
                "Authorization",
                "Content-Type",
                "X-CSRF-Token",
                "Connect-Protocol-Version",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            exposed_headers: vec!["Link".to_owned()],
            allow_credentials: true,
            max_age_seconds: 300,
        }
    }
}
