//! gRPC client implementation of `CalculatorClientV1`

use anyhow::Result;
use async_trait::async_trait;
use tonic::transport::Channel;
use transport_grpc::{GrpcClientConfig, connect_with_stack};

use crate::api::{CalculatorClientV1, CalculatorError};
use crate::proto::calculator_service_client::CalculatorServiceClient;
use crate::proto::{OperateRequest, Operation};

/// gRPC client implementation of `CalculatorClientV1`
#[derive(Clone)]
pub struct CalculatorGrpcClient {
    inner: CalculatorServiceClient<Channel>,
}

impl CalculatorGrpcClient {
    /// Connect to the `CalculatorService` using the default transport configuration.
    ///
    /// # Errors
    /// Returns an error if the endpoint is invalid or unreachable.
    pub async fn connect(uri: impl Into<String>) -> Result<Self> {
        let cfg = GrpcClientConfig::new("calculator");
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

impl From<Channel> for CalculatorGrpcClient {
    fn from(channel: Channel) -> Self {
        Self {
            inner: CalculatorServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl CalculatorClientV1 for CalculatorGrpcClient {
    async fn operate(&self, a: f64, b: f64, operation: Operation) -> Result<f64, CalculatorError> {
        let mut client = self.inner.clone();

        let request = tonic::Request::new(OperateRequest {
            operand_a: a,
            operand_b: b,
            operation: operation.into(),
        });

        let response = client.operate(request).await.map_err(|status| {
            tracing::debug!(code = ?status.code(), message = status.message(), "operate failed");
            CalculatorError::from(status)
        })?;

        Ok(response.into_inner().result)
    }
}
