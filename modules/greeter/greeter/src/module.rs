//! Greeter Module definition

use std::sync::Arc;

use greeter_sdk::{GreetServiceServer, SERVICE_NAME};
use grpc_hub::{GrpcServiceInstaller, GrpcServiceModule};

use crate::api::grpc::GreeterServiceImpl;
use crate::domain::Service;

/// Greeter module.
#[derive(Clone, Default)]
pub struct GreeterModule {
    service: Arc<Service>,
}

impl GreeterModule {
    #[must_use]
    pub fn new() -> Self {
        tracing::info!("Initializing greeter module");
        Self::default()
    }
}

impl GrpcServiceModule for GreeterModule {
    fn name(&self) -> &'static str {
        "greeter"
    }

    fn grpc_services(&self) -> Vec<GrpcServiceInstaller> {
        let svc = GreetServiceServer::new(GreeterServiceImpl::new(Arc::clone(&self.service)));
        vec![GrpcServiceInstaller::new(SERVICE_NAME, svc)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports_greet_service() {
        let module = GreeterModule::new();
        let services = module.grpc_services();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].service_name, "greet.v1.GreetService");
    }
}
