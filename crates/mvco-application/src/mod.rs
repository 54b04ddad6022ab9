//! Application layer for mvc-override
//!
//! The [`ResolvingFactory`](factory::ResolvingFactory) decorator that
//! substitutes configured replacement classes during resolution, and the
//! [`MvcOverridePlugin`](hook::MvcOverridePlugin) lifecycle hook that
//! installs it into a booted component's container.

pub mod factory;
pub mod hook;

pub use factory::ResolvingFactory;
pub use hook::MvcOverridePlugin;
