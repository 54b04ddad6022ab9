//! Structured logging with tracing
//!
//! Centralized logging setup using the tracing ecosystem. The `MVCO_LOG`
//! environment variable overrides the configured level filter.

use mvco_domain::error::{Error, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration.
///
/// Fails when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_env("MVCO_LOG").unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = Registry::default().with(filter);

    let result = if config.json_format {
        registry
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|error| {
        Error::configuration_with_source("failed to initialize logging", error)
    })
}
