//! Infrastructure layer for mvc-override
//!
//! Host-facing adapters and wiring: configuration loading, logging setup,
//! an in-memory service container, a class-loader adapter, the synchronous
//! lifecycle event dispatcher, and the bootstrap composition root.

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod container;
pub mod dispatch;
pub mod loader;
pub mod logging;

pub use bootstrap::init_plugin;
pub use config::{ConfigLoader, LoggingConfig, PluginConfig};
pub use container::MemoryServiceContainer;
pub use dispatch::ExtensionEventDispatcher;
pub use loader::RegistryClassLoader;
