//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ConvertXffConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ConvertXffConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ConvertXffConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::debug!(path = ?path, "Filter configuration loaded");
    Ok(config)
}
