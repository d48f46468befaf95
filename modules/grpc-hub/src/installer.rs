//! Contracts between service modules and the hub.

use tonic::service::RoutesBuilder;

/// Registers one tonic service into the hub's route table.
pub struct GrpcServiceInstaller {
    /// Fully qualified gRPC service name, e.g. `calculator.v1.CalculatorService`.
    pub service_name: &'static str,
    pub register: Box<dyn Fn(&mut RoutesBuilder) + Send + Sync>,
}

impl GrpcServiceInstaller {
    /// Installer for a concrete tonic service value.
    pub fn new<S>(service_name: &'static str, svc: S) -> Self
    where
        S: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<tonic::body::Body>,
                Error = std::convert::Infallible,
            > + tonic::server::NamedService
            + Clone
            + Send
            + Sync
            + 'static,
        S::Future: Send + 'static,
    {
        Self {
            service_name,
            register: Box::new(move |routes| {
                routes.add_service(svc.clone());
            }),
        }
    }
}

impl std::fmt::Debug for GrpcServiceInstaller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcServiceInstaller")
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}

/// All installers contributed by one module.
#[derive(Debug)]
pub struct ModuleInstallers {
    pub module_name: String,
    pub installers: Vec<GrpcServiceInstaller>,
}

/// A module that exposes gRPC services through the hub.
pub trait GrpcServiceModule: Send + Sync {
    /// Module name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Installers for every service the module exports.
    fn grpc_services(&self) -> Vec<GrpcServiceInstaller>;
}

/// Gather installers from every module, preserving module order.
#[must_use]
pub fn collect_installers(modules: &[&dyn GrpcServiceModule]) -> Vec<ModuleInstallers> {
    modules
        .iter()
        .map(|m| ModuleInstallers {
            module_name: m.name().to_owned(),
            installers: m.grpc_services(),
        })
        .collect()
}
