//! Configuration loader
//!
//! Loads plugin configuration from defaults, an optional TOML file, and
//! prefixed environment variables, in that precedence order.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use mvco_domain::error::{Error, Result};
use tracing::{debug, warn};

use crate::config::PluginConfig;
use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources.
    ///
    /// Sources are merged in this order (later overrides earlier):
    /// 1. `PluginConfig::default()`
    /// 2. TOML configuration file (explicit path, or `mvco.toml` in the
    ///    working directory when present)
    /// 3. Environment variables with the prefix (e.g. `MVCO_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<PluginConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(PluginConfig::default()));

        if let Some(config_path) = &self.config_path {
            figment = figment.merge(Toml::file(config_path));
            debug!(path = %config_path.display(), "merging configuration file");
        } else {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(&default_path));
                debug!(path = %default_path.display(), "merging default configuration file");
            }
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        figment.extract().map_err(|error| {
            Error::configuration_with_source("failed to extract plugin configuration", error)
        })
    }

    /// Load configuration, degrading to the empty default on failure.
    ///
    /// A malformed or missing configuration yields an empty override list
    /// rather than an error; the misconfiguration only manifests as the
    /// overrides having no effect.
    pub fn load_or_default(&self) -> PluginConfig {
        match self.load() {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "falling back to default configuration");
                PluginConfig::default()
            }
        }
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp config file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_load_overrides_with_host_field_names() {
        let file = write_config(
            r#"
            [[overrides]]
            component = "com_foo"
            class = "FooModel"
            newClass = "BarModel"
            newFile = "src/Bar.php"

            [[overrides]]
            component = "com_baz"
            class = "BazView"
            newClass = "QuxView"
            newFile = ""
            "#,
        );

        let config = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .expect("config should load");

        assert_eq!(config.overrides.len(), 2);
        assert_eq!(config.overrides[0].target_class, "FooModel");
        assert_eq!(
            config.overrides[0].replacement_source(),
            Some(Path::new("src/Bar.php"))
        );
        // Empty newFile means "already autoloadable".
        assert_eq!(config.overrides[1].replacement_source(), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ConfigLoader::new()
            .with_config_path("/nonexistent/mvco.toml")
            .load()
            .expect("missing file still extracts defaults");

        assert!(config.overrides.is_empty());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty_registry() {
        let file = write_config("overrides = \"not a list\"\n");

        let config = ConfigLoader::new()
            .with_config_path(file.path())
            .load_or_default();

        assert!(config.overrides.is_empty());
        assert!(config.registry().is_empty());
    }

    #[test]
    fn test_logging_section() {
        let file = write_config(
            r#"
            [logging]
            level = "debug"
            json_format = true
            "#,
        );

        let config = ConfigLoader::new()
            .with_config_path(file.path())
            .load()
            .expect("config should load");

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
    }
}
