//! # mvc-override
//!
//! A library for redirecting MVC class-name resolutions of a host
//! application's components to alternate classes, driven by external
//! configuration and installed through the host's "component booted"
//! lifecycle notification.
//!
//! ## How it works
//!
//! - Administrators configure override rules: per component, a standard
//!   class name to intercept and the replacement class (optionally with a
//!   source file to load it from).
//! - When the host boots a component, the lifecycle hook checks its
//!   service container and, when overrides exist for that component and
//!   the bound MVC factory is the host's pristine base implementation,
//!   installs a decorating factory in its place.
//! - The decorator delegates resolution to the wrapped factory first and
//!   substitutes the replacement class only when the base resolution
//!   succeeded and the replacement is loadable. Everything else falls
//!   back to standard behavior; misconfiguration never breaks the host.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mvco::domain::ports::{MvcFactory, ServiceContainer, MVC_FACTORY_SERVICE};
//! use mvco::domain::{ExtensionBootedEvent, ExtensionType, OverrideRegistry, OverrideRule};
//! use mvco::application::MvcOverridePlugin;
//! use mvco::infrastructure::{MemoryServiceContainer, RegistryClassLoader};
//!
//! struct BaseFactory;
//!
//! impl MvcFactory for BaseFactory {
//!     fn resolve_class_name(&self, suffix: &str, prefix: &str) -> Option<String> {
//!         Some(format!("{prefix}{suffix}"))
//!     }
//!
//!     fn namespace(&self) -> &str {
//!         "Vendor\\Component"
//!     }
//! }
//!
//! let registry = OverrideRegistry::from_rules(vec![OverrideRule::new(
//!     "com_foo",
//!     "FooModel",
//!     "BarModel",
//! )]);
//! let loader = Arc::new(RegistryClassLoader::new());
//! loader.preload("BarModel");
//!
//! let plugin = MvcOverridePlugin::new::<BaseFactory>(registry, loader);
//!
//! let container = Arc::new(MemoryServiceContainer::new());
//! container.bind(MVC_FACTORY_SERVICE, Arc::new(BaseFactory));
//!
//! let event = ExtensionBootedEvent::new(ExtensionType::Component, "foo", container.clone());
//! plugin.on_after_extension_boot(&event);
//!
//! let factory = container.get(MVC_FACTORY_SERVICE).unwrap();
//! assert_eq!(
//!     factory.resolve_class_name("Model", "Foo"),
//!     Some("BarModel".to_string())
//! );
//! ```

/// Domain layer - override rules, lifecycle events, and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use mvco_domain::*;
}

/// Application layer - resolving factory decorator and lifecycle hook
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use mvco_application::*;
}

/// Infrastructure layer - configuration, logging, and host adapters
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use mvco_infrastructure::*;
}
