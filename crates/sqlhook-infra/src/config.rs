//! Flow configuration loader.
//!
//! Without a path the built-in [`FlowConfig::default()`] is used and no file
//! is touched. With a path, the file must exist, parse as TOML, and pass
//! [`FlowConfig::validate`]; anything else is an error, never a fallback to
//! the defaults.

use std::path::Path;

use sqlhook_types::config::FlowConfig;
use sqlhook_types::error::ConfigError;

/// Load the flow configuration from `path`, or the defaults when `None`.
pub async fn load_flow_config(path: Option<&Path>) -> Result<FlowConfig, ConfigError> {
    let Some(path) = path else {
        tracing::debug!("No config file given, using built-in defaults");
        return Ok(FlowConfig::default());
    };

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

    let config = toml::from_str::<FlowConfig>(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;

    config.validate()?;

    tracing::debug!(path = %path.display(), "Loaded flow config");
    Ok(config)
}
