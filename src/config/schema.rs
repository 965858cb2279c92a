//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Configuration for the X-Forwarded-For filter.
///
/// Carries no options. Any keys present in a config file are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ConvertXffConfig {}

/// Create the default filter configuration.
pub fn create_config() -> ConvertXffConfig {
    ConvertXffConfig::default()
}
