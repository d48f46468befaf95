//! gRPC Server implementation for greeter

use std::sync::Arc;

use tonic::metadata::MetadataValue;
use tonic::{Request, Response, Status};

use greeter_sdk::{GREET_VERSION, GREET_VERSION_HEADER, GreetRequest, GreetResponse, GreetService};

use crate::domain::Service;

/// gRPC service implementation that wraps the domain Service.
#[derive(Clone)]
pub struct GreeterServiceImpl {
    service: Arc<Service>,
}

impl GreeterServiceImpl {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl GreetService for GreeterServiceImpl {
    async fn greet(
        &self,
        request: Request<GreetRequest>,
    ) -> Result<Response<GreetResponse>, Status> {
        let req = request.into_inner();
        tracing::debug!(name = %req.name, age = req.age, "received greet request");

        let out = self.service.greet(&req.name, req.age);

        let mut response = Response::new(GreetResponse {
            greeting: out.greeting,
            age: out.age,
        });
        let value = MetadataValue::from_static(GREET_VERSION);
        response.metadata_mut().insert(GREET_VERSION_HEADER, value);
        Ok(response)
    }
}
