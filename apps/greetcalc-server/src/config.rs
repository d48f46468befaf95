use bootstrap::LoggingConfig;
use grpc_hub::{CorsConfig, GrpcHubConfig};
use serde::{Deserialize, Serialize};

/// Top-level configuration of the server process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: GrpcHubConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Apply command-line overrides on top of the layered configuration.
    pub fn apply_cli_overrides(&mut self, listen: Option<&str>) {
        if let Some(addr) = listen {
            addr.clone_into(&mut self.server.listen_addr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_local_setup() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(cfg.cors.allowed_origins, vec!["http://localhost:3001"]);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_listen_override() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(None);
        assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");

        cfg.apply_cli_overrides(Some("0.0.0.0:9000"));
        assert_eq!(cfg.server.listen_addr, "0.0.0.0:9000");
    }
}
