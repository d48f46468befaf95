//! gRPC client implementation of `GreeterClientV1`

use anyhow::Result;
use async_trait::async_trait;
use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;
use transport_grpc::{GrpcClientConfig, connect_with_stack};

use crate::GREET_VERSION_HEADER;
use crate::api::{GreeterClientV1, GreeterError};
use crate::models::Greeting;
use crate::proto::GreetRequest;
use crate::proto::greet_service_client::GreetServiceClient;

/// gRPC client implementation of `GreeterClientV1`
#[derive(Clone)]
pub struct GreeterGrpcClient {
    inner: GreetServiceClient<Channel>,
}

impl GreeterGrpcClient {
    /// Connect to the `GreetService` using the default transport configuration.
    ///
    /// # Errors
    /// Returns an error if the endpoint is invalid or unreachable.
    pub async fn connect(uri: impl Into<String>) -> Result<Self> {
        let cfg = GrpcClientConfig::new("greeter");
        Self::connect_with_config(uri, &cfg).await
    }

    /// Connect with an explicit transport configuration.
    ///
    /// # Errors
    /// Returns an error if the endpoint is invalid or unreachable.
    pub async fn connect_with_config(
        uri: impl Into<String>,
        cfg: &GrpcClientConfig,
    ) -> Result<Self> {
        let channel: Channel = connect_with_stack(uri, cfg).await?;
        Ok(Self::from(channel))
    }
}

impl From<Channel> for GreeterGrpcClient {
    fn from(channel: Channel) -> Self {
        Self {
            inner: GreetServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl GreeterClientV1 for GreeterGrpcClient {
    async fn greet(&self, name: &str, age: i32) -> Result<Greeting, GreeterError> {
        let mut client = self.inner.clone();

        let response = client
            .greet(GreetRequest {
                name: name.to_owned(),
                age,
            })
            .await
            .map_err(|status| {
                tracing::debug!(code = ?status.code(), message = status.message(), "greet failed");
                GreeterError::from(status)
            })?;

        let version = response
            .metadata()
            .get(GREET_VERSION_HEADER)
            .map(header_text)
            .transpose()?;

        let body = response.into_inner();
        Ok(Greeting {
            greeting: body.greeting,
            age: body.age,
            version,
        })
    }
}

fn header_text(value: &MetadataValue<Ascii>) -> Result<String, GreeterError> {
    match value.to_str() {
        Ok(text) => Ok(text.to_owned()),
        Err(e) => {
            let msg = format!("non-ascii {GREET_VERSION_HEADER}: {e}");
            Err(GreeterError::Internal(msg))
        }
    }
}
