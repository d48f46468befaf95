//! Process-wide `tracing` subscriber setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt};

/// Output format for log records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging section of the application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. `info` or `greetcalc=debug,tonic=info`.
    pub level: String,
    pub format: LogFormat,
    /// Include the event target (module path) in text output.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
            with_target: true,
        }
    }
}

/// Resolve the filter directive from config and the `-v` count.
///
/// `-v` => info, `-vv` => debug, `-vvv` and more => trace. Without `-v` the
/// configured level is used.
#[must_use]
pub fn effective_directive(cfg: &LoggingConfig, verbose: u8) -> String {
    match verbose {
        0 => cfg.level.clone(),
        1 => "info".to_owned(),
        2 => "debug".to_owned(),
        _ => "trace".to_owned(),
    }
}

fn build_filter(cfg: &LoggingConfig, verbose: u8) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    let directive = effective_directive(cfg, verbose);
    EnvFilter::try_new(&directive).with_context(|| format!("invalid log filter '{directive}'"))
}

/// Install the global subscriber and bridge `log` records into `tracing`.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
/// Returns an error if the filter directive is invalid or a global subscriber
/// or logger has already been installed.
pub fn init_logging(cfg: &LoggingConfig, verbose: u8) -> Result<()> {
    let filter = build_filter(cfg, verbose)?;

    let fmt_layer = match cfg.format {
        LogFormat::Text => tracing_subscriber::fmt::layer()
            .with_target(cfg.with_target)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(cfg.with_target)
            .boxed(),
    };

    let subscriber = Registry::default().with(fmt_layer).with(filter);
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install global tracing subscriber")?;
    tracing_log::LogTracer::init().context("failed to bridge `log` records into tracing")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_overrides_level() {
        let cfg = LoggingConfig {
            level: "warn".to_owned(),
            ..LoggingConfig::default()
        };
        assert_eq!(effective_directive(&cfg, 0), "warn");
        assert_eq!(effective_directive(&cfg, 1), "info");
        assert_eq!(effective_directive(&cfg, 2), "debug");
        assert_eq!(effective_directive(&cfg, 3), "trace");
        assert_eq!(effective_directive(&cfg, 7), "trace");
    }

    #[test]
    fn test_invalid_directive_is_rejected() {
        let cfg = LoggingConfig {
            level: "not=a=valid=[filter".to_owned(),
            ..LoggingConfig::default()
        };
        temp_env::with_var_unset("RUST_LOG", || {
            assert!(build_filter(&cfg, 0).is_err());
        });
    }

    #[test]
    fn test_format_deserializes_snake_case() {
        let cfg: LoggingConfig =
            serde_saphyr::from_str("level: debug\nformat: json\n").expect("parse");
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.level, "debug");
        assert!(cfg.with_target);
    }
}
