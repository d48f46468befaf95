use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Result, bail};
use http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Parse every entry, dropping the ones that fail with a warning naming `kind`.
fn parse_entries<T>(kind: &'static str, values: &[String]) -> Vec<T>
where
    T: FromStr,
    T::Err: Display,
{
    values
        .iter()
        .filter_map(|s| {
            s.parse::<T>()
                .inspect_err(|e| {
                    warn!(kind, value = %s, error = %e, "skipping invalid CORS entry");
                })
                .ok()
        })
        .collect()
}

/// Build a CORS layer from config.
///
/// Entries that are not valid header values, methods or header names are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an error if `allow_credentials` is `true` while origins, methods or
/// headers contain `"*"`. Browsers reject that combination.
pub fn build_cors_layer(cfg: &CorsConfig) -> Result<CorsLayer> {
    let has_wildcard_origin = is_wildcard(&cfg.allowed_origins);

    if cfg.allow_credentials {
        for (field, values) in [
            ("allowed_origins", &cfg.allowed_origins),
            ("allowed_methods", &cfg.allowed_methods),
            ("allowed_headers", &cfg.allowed_headers),
        ] {
            if is_wildcard(values) {
                bail!(
                    "CORS misconfiguration: {field}=['*'] cannot be combined with \
                     allow_credentials=true; list explicit values instead"
                );
            }
        }
    }

    if has_wildcard_origin {
        warn!("CORS is configured with allowed_origins=['*']; any website may call the services");
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = parse_entries("origin", &cfg.allowed_origins);
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if is_wildcard(&cfg.allowed_methods) {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<Method> = parse_entries("method", &cfg.allowed_methods);
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if is_wildcard(&cfg.allowed_headers) {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<HeaderName> = parse_entries("header", &cfg.allowed_headers);
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    let exposed: Vec<HeaderName> = parse_entries("exposed header", &cfg.exposed_headers);
    if !exposed.is_empty() {
        layer = layer.expose_headers(exposed);
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(Duration::from_secs(cfg.max_age_seconds));
    }

    Ok(layer)
}

/// Check a CORS policy without keeping the layer.
///
/// # Errors
///
/// Same conditions as [`build_cors_layer`].
pub fn validate_cors(cfg: &CorsConfig) -> Result<()> {
    build_cors_layer(cfg).map(|_layer| ())
}
