//! Domain layer for mvc-override
//!
//! Core types and port traits for redirecting MVC class-name resolution:
//! override rules and their registry, the lifecycle event that triggers
//! installation, and the traits the host application implements
//! (factory, class loader, service container).

pub mod error;
pub mod events;
pub mod ports;
pub mod rule;

pub use error::{Error, Result};
pub use events::{ExtensionBootedEvent, ExtensionType};
pub use rule::{OverrideRegistry, OverrideRule};
