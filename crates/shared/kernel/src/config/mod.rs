use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "FOUNDRY";
/// Separator between the prefix and each level of nesting.
pub const ENV_SEPARATOR: &str = "__";

#[foundry_derive::foundry_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a configuration file overlaid with environment variables.
///
/// 1. **File**: `path` is required; its format (TOML, JSON, YAML, ...) is
///    picked from the extension.
/// 2. **Environment**: variables prefixed with `FOUNDRY__` override file
///    values. Nesting uses double underscores, so `FOUNDRY__LOG__LEVEL` maps
///    to `log.level`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or malformed, or if
/// the merged values do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use foundry_kernel::config::load_config;
///
/// #[derive(serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config("config/local.toml")?;
/// # Ok::<(), foundry_kernel::config::ConfigError>(())
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layers(path.as_ref(), None)
}

/// [`load_config`] with an explicit environment instead of the process one.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: impl AsRef<Path>,
    env: Map<String, String>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layers(path.as_ref(), Some(env))
}

fn load_layers<T>(path: &Path, env: Option<Map<String, String>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    info!("Loading config from {}", path.display());

    Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .source(env),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
