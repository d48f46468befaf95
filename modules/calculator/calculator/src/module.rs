//! Calculator Module definition

use std::sync::Arc;

use calculator_sdk::{CalculatorServiceServer, SERVICE_NAME};
use grpc_hub::{GrpcServiceInstaller, GrpcServiceModule};

use crate::api::grpc::CalculatorServiceImpl;
use crate::domain::Service;

/// Calculator module.
///
/// Exposes the calculator service via gRPC through the hub.
#[derive(Clone, Default)]
pub struct CalculatorModule {
    service: Arc<Service>,
}

impl CalculatorModule {
    #[must_use]
    pub fn new() -> Self {
        tracing::info!("Initializing calculator module");
        Self::default()
    }

    /// The domain service backing the gRPC endpoint.
    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }
}

impl GrpcServiceModule for CalculatorModule {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn grpc_services(&self) -> Vec<GrpcServiceInstaller> {
        let svc = CalculatorServiceServer::new(CalculatorServiceImpl::new(self.service()));
        vec![GrpcServiceInstaller::new(SERVICE_NAME, svc)]
    }
}
