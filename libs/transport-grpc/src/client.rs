//! gRPC client transport configuration and connection utilities.

use std::time::Duration;
use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

fn duration_to_u64_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the initial connection.
    pub connect_timeout: Duration,

    /// Deadline applied to every RPC issued over the channel.
    pub rpc_timeout: Duration,

    /// Service name used in tracing fields.
    pub service_name: &'static str,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            rpc_timeout: Duration::from_secs(30),
            service_name: "grpc_client",
        }
    }
}

impl GrpcClientConfig {
    /// Create a new configuration with the given service name.
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Default::default()
        }
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the RPC timeout.
    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }
}

/// Build a tonic `Endpoint` with timeouts and keepalive settings.
fn build_endpoint(
    uri: String,
    cfg: &GrpcClientConfig,
) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Connect to a gRPC service with the configured transport stack.
///
/// # Example
///
/// ```ignore
/// use transport_grpc::{connect_with_stack, GrpcClientConfig};
///
/// let config = GrpcClientConfig::new("calculator");
/// let channel: Channel = connect_with_stack("http://127.0.0.1:8080", &config).await?;
/// let client = CalculatorServiceClient::new(channel);
/// ```
///
/// # Errors
/// Returns an error if the URI is invalid or the connection cannot be established
/// within `connect_timeout`.
pub async fn connect_with_stack<TClient>(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let uri_string = uri.into();
    let span = tracing::debug_span!(
        "grpc_connect",
        service = cfg.service_name,
        uri = %uri_string
    );

    async move {
        let endpoint = build_endpoint(uri_string, cfg)?;
        let channel = endpoint.connect().await?;

        tracing::info!(
            service_name = cfg.service_name,
            connect_timeout_ms = duration_to_u64_ms(cfg.connect_timeout),
            rpc_timeout_ms = duration_to_u64_ms(cfg.rpc_timeout),
            "gRPC client connected"
        );

        Ok(TClient::from(channel))
    }
    .instrument(span)
    .await
}
