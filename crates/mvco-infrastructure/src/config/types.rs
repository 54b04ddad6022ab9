//! Configuration types

use mvco_domain::rule::{OverrideRegistry, OverrideRule};
use serde::{Deserialize, Serialize};

/// Top-level plugin configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Configured override entries, in registration order
    pub overrides: Vec<OverrideRule>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl PluginConfig {
    /// Build the immutable override registry from this configuration
    pub fn registry(&self) -> OverrideRegistry {
        OverrideRegistry::from_rules(self.overrides.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}
