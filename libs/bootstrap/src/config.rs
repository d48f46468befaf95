//! Layered configuration loading.
//!
//! Precedence, lowest to highest:
//! 1) `T::default()`
//! 2) YAML file (if provided)
//! 3) environment variables prefixed with `APP__` (`APP__SERVER__LISTEN_ADDR`)
//!
//! CLI overrides are applied by the binary on the extracted value.

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Environment prefix for configuration overrides. Nesting uses `__`.
pub const ENV_PREFIX: &str = "APP__";

/// Load `T` from defaults, an optional YAML file and `APP__*` environment variables.
///
/// # Errors
/// Returns an error if `config_path` is given but is not a file, or if the merged
/// configuration does not deserialize into `T`.
pub fn load_layered<T>(config_path: Option<&Path>) -> Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    let mut figment = Figment::new().merge(Serialized::defaults(T::default()));

    if let Some(path) = config_path {
        if !path.is_file() {
            bail!("config file does not exist: {}", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    figment
        .extract()
        .context("failed to load layered configuration")
}

/// Render any serializable configuration as YAML.
///
/// # Errors
/// Returns an error if the value cannot be serialized.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_saphyr::to_string(value).context("failed to render configuration as YAML")
}
