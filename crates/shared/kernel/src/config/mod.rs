use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Default configuration file stem, resolved in the working directory (`gymhub.toml`, ...).
pub const DEFAULT_CONFIG_STEM: &str = "gymhub";
/// Prefix of environment overrides (`GYMHUB__API__BASE_URL`).
pub const ENV_PREFIX: &str = "GYMHUB";

/// Custom error type for config loading.
#[gymhub_derive::gymhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration by layering a file with environment overrides.
///
/// 1. **Base File**: an explicit `path` must exist. Without one, `gymhub.{toml,yaml,json}`
///    in the working directory is used when present, otherwise only defaults apply.
/// 2. **Environment Overrides**: variables prefixed with `GYMHUB__`, nested with double
///    underscores (`GYMHUB__SEARCH__DEBOUNCE_MS=150` maps to `search.debounce_ms`).
///
/// # Errors
/// Returns an error if an explicit file is missing, a source is malformed, or the merged
/// values do not match `T`.
///
/// # Example
/// ```rust
/// use gymhub_kernel::config::load_config;
/// use gymhub_kernel::domain::config::ClientConfig;
///
/// let cfg: ClientConfig = load_config(None::<&str>).unwrap_or_default();
/// assert!(cfg.api.base_url.starts_with("http"));
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let file = match &path {
        Some(p) => {
            debug!("Loading config from {}", p.as_ref().display());
            File::from(p.as_ref()).required(true)
        },
        None => {
            debug!("Loading optional config '{DEFAULT_CONFIG_STEM}'");
            File::with_name(DEFAULT_CONFIG_STEM).required(false)
        },
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
