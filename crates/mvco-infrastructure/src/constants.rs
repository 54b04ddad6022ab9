//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "MVCO";

/// Default configuration file name probed in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "mvco.toml";
