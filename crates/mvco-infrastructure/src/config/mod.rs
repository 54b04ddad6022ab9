//! Plugin configuration
//!
//! Types and the figment-based loader for the override configuration the
//! host administrator maintains.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{LoggingConfig, PluginConfig};
