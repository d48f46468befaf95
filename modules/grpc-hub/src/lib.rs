//! gRPC Hub
//!
//! Builds and hosts the single `tonic::Server` instance for the process.
//! Service modules contribute [`GrpcServiceInstaller`]s; the hub validates
//! them, assembles one route table, wraps it in the configured CORS layer and
//! serves HTTP/2 cleartext until cancelled.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod cors;
pub mod installer;
pub mod lifecycle;

pub use config::{CorsConfig, GrpcHubConfig};
pub use installer::{
    GrpcServiceInstaller, GrpcServiceModule, ModuleInstallers, collect_installers,
};
pub use lifecycle::ReadySignal;

use anyhow::Context;
use parking_lot::RwLock;
#[cfg(unix)]
use std::path::PathBuf;
use std::{
    collections::HashSet,
    net::{Ipv4Addr, SocketAddr},
};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::{service::RoutesBuilder, transport::Server};

/// Configuration for the listen address
#[derive(Clone, Debug)]
enum ListenConfig {
    Tcp(SocketAddr),
    #[cfg(unix)]
    Uds(PathBuf),
}

/// The gRPC Hub.
pub struct GrpcHub {
    listen_cfg: RwLock<ListenConfig>,
    cors: CorsConfig,
    bound_endpoint: RwLock<Option<String>>,
}

impl Default for GrpcHub {
    fn default() -> Self {
        Self {
            listen_cfg: RwLock::new(ListenConfig::Tcp(SocketAddr::from((
                Ipv4Addr::LOCALHOST,
                8080,
            )))),
            cors: CorsConfig::default(),
            bound_endpoint: RwLock::new(None),
        }
    }
}

impl GrpcHub {
    /// Create a hub from its configuration sections.
    ///
    /// # Errors
    /// Returns an error if `listen_addr` is invalid or unsupported on this platform.
    pub fn new(cfg: &GrpcHubConfig, cors: CorsConfig) -> anyhow::Result<Self> {
        let hub = Self {
            cors,
            ..Self::default()
        };
        hub.apply_listen_config(&cfg.listen_addr)?;
        Ok(hub)
    }

    /// Update the listen address to TCP (primarily used by tests).
    pub fn set_listen_addr_tcp(&self, addr: SocketAddr) {
        *self.listen_cfg.write() = ListenConfig::Tcp(addr);
    }

    /// Current TCP listen address (returns None if using UDS).
    pub fn listen_addr_tcp(&self) -> Option<SocketAddr> {
        match *self.listen_cfg.read() {
            ListenConfig::Tcp(addr) => Some(addr),
            #[cfg(unix)]
            ListenConfig::Uds(_) => None,
        }
    }

    /// The actual bound endpoint after the server has started.
    ///
    /// `http://127.0.0.1:50652` for TCP or `unix:///path/to/socket` for UDS;
    /// `None` before the listener is bound.
    pub fn bound_endpoint(&self) -> Option<String> {
        self.bound_endpoint.read().clone()
    }

    fn set_bound_endpoint(&self, endpoint: String) {
        *self.bound_endpoint.write() = Some(endpoint);
    }

    /// Parse and apply listen address configuration.
    ///
    /// # Errors
    /// Returns an error if the address format is invalid or unsupported on the platform.
    pub fn apply_listen_config(&self, listen_addr: &str) -> anyhow::Result<()> {
        if self.apply_platform_specific(listen_addr)? {
            return Ok(());
        }

        let addr = listen_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid listen_addr '{listen_addr}'"))?;
        *self.listen_cfg.write() = ListenConfig::Tcp(addr);
        tracing::info!(%addr, "gRPC hub listen address configured for TCP");

        Ok(())
    }

    /// Returns `Ok(true)` if the address was fully handled here,
    /// `Ok(false)` if the caller should fall back to TCP parsing.
    #[cfg(unix)]
    fn apply_platform_specific(&self, listen_addr: &str) -> anyhow::Result<bool> {
        if let Some(uds_path) = listen_addr.strip_prefix("uds://") {
            if uds_path.is_empty() {
                anyhow::bail!("UDS listen_addr has an empty path: '{listen_addr}'");
            }
            let path = PathBuf::from(uds_path);
            tracing::info!(
                path = %path.display(),
                "gRPC hub listen address configured for UDS"
            );
            *self.listen_cfg.write() = ListenConfig::Uds(path);
            return Ok(true);
        }

        Ok(false)
    }

    #[cfg(not(unix))]
    fn apply_platform_specific(&self, listen_addr: &str) -> anyhow::Result<bool> {
        if listen_addr.starts_with("uds://") {
            anyhow::bail!("UDS listen_addr is not supported on this platform: '{listen_addr}'");
        }
        Ok(false)
    }

    /// Validate that all service names are unique across all modules.
    fn validate_unique_services(modules: &[ModuleInstallers]) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for module in modules {
            for installer in &module.installers {
                if !seen.insert(installer.service_name) {
                    anyhow::bail!(
                        "Duplicate gRPC service detected: {} (module {})",
                        installer.service_name,
                        module.module_name
                    );
                }
            }
        }
        Ok(())
    }

    /// Build routes from module installers. Returns None if no services registered.
    fn build_routes_from_modules(modules: &[ModuleInstallers]) -> Option<tonic::service::Routes> {
        let mut routes_builder = RoutesBuilder::default();
        let mut has_services = false;
        for module in modules {
            for installer in &module.installers {
                (installer.register)(&mut routes_builder);
                tracing::debug!(
                    module = %module.module_name,
                    service = installer.service_name,
                    "gRPC service installed"
                );
                has_services = true;
            }
        }
        has_services.then(|| routes_builder.routes())
    }

    /// Remove a stale socket file left behind by a previous run.
    #[cfg(unix)]
    fn prepare_uds_socket_path(path: &std::path::Path) {
        use std::io;

        if !path.exists() {
            return;
        }

        match std::fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(
                    path = %path.display(),
                    "removed existing UDS socket file before bind"
                );
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to remove existing UDS socket file before bind"
                );
            }
        }
    }

    /// Run the tonic server with the provided installers until `cancel` fires.
    ///
    /// With no installers the hub signals ready and idles until cancelled.
    ///
    /// # Errors
    /// Returns an error on duplicate services, an invalid CORS policy, or if
    /// binding or serving fails.
    pub async fn run_with_installers(
        &self,
        modules: Vec<ModuleInstallers>,
        cancel: CancellationToken,
        ready: ReadySignal,
    ) -> anyhow::Result<()> {
        Self::validate_unique_services(&modules)?;
        let cors = cors::build_cors_layer(&self.cors)?;

        let Some(routes) = Self::build_routes_from_modules(&modules) else {
            tracing::info!("no gRPC services registered; hub idle until shutdown");
            ready.notify();
            cancel.cancelled().await;
            return Ok(());
        };

        let listen_cfg = self.listen_cfg.read().clone();
        let result = match listen_cfg {
            ListenConfig::Tcp(addr) => self.serve_tcp(addr, routes, cors, cancel, ready).await,
            #[cfg(unix)]
            ListenConfig::Uds(path) => self.serve_uds(path, routes, cors, cancel, ready).await,
        };

        tracing::info!("gRPC hub stopped");
        result
    }

    async fn serve_tcp(
        &self,
        addr: SocketAddr,
        routes: tonic::service::Routes,
        cors: tower_http::cors::CorsLayer,
        cancel: CancellationToken,
        ready: ReadySignal,
    ) -> anyhow::Result<()> {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind TCP listener at {addr}"))?;
        let bound_addr = listener.local_addr()?;
        tracing::info!(%bound_addr, transport = "tcp", "gRPC hub listening");

        self.set_bound_endpoint(format!("http://{bound_addr}"));
        ready.notify();

        let incoming = TcpListenerStream::new(listener);
        Server::builder()
            .accept_http1(true)
            .layer(cors)
            .add_routes(routes)
            .serve_with_incoming_shutdown(incoming, cancel.cancelled_owned())
            .await?;
        Ok(())
    }

    #[cfg(unix)]
    async fn serve_uds(
        &self,
        path: PathBuf,
        routes: tonic::service::Routes,
        cors: tower_http::cors::CorsLayer,
        cancel: CancellationToken,
        ready: ReadySignal,
    ) -> anyhow::Result<()> {
        use tokio::net::UnixListener;
        use tokio_stream::wrappers::UnixListenerStream;

        Self::prepare_uds_socket_path(&path);

        let uds = UnixListener::bind(&path)
            .with_context(|| format!("failed to bind UDS listener at '{}'", path.display()))?;
        tracing::info!(
            path = %path.display(),
            transport = "uds",
            "gRPC hub listening"
        );

        self.set_bound_endpoint(format!("unix://{}", path.display()));
        ready.notify();

        let incoming = UnixListenerStream::new(uds);
        Server::builder()
            .accept_http1(true)
            .layer(cors)
            .add_routes(routes)
            .serve_with_incoming_shutdown(incoming, cancel.cancelled_owned())
            .await?;
        Ok(())
    }
}
