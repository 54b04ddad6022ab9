//! Port traits implemented by the host application
//!
//! These are the seams between the override machinery and the host:
//! the MVC factory whose resolution gets decorated, the class loader
//! that makes replacement classes loadable, and the per-extension
//! service container the factory lives in.

pub mod container;
pub mod factory;
pub mod loader;

pub use container::{ServiceContainer, MVC_FACTORY_SERVICE};
pub use factory::{FactoryAttachments, FactoryLogger, MvcFactory, SubFactoryKind};
pub use loader::ClassLoader;
