//! Lifecycle events
//!
//! The host emits a notification once an extension has finished its own
//! boot sequence, carrying the extension's identity and the service
//! container built for it.

use std::sync::Arc;

use crate::ports::container::ServiceContainer;

/// Kind of extension the host has booted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionType {
    /// A component extension (the only kind carrying an MVC factory)
    Component,
    /// A module extension
    Module,
    /// A plugin extension
    Plugin,
    /// A template extension
    Template,
    /// A library extension
    Library,
}

/// Notification fired after an extension has been booted
#[derive(Clone)]
pub struct ExtensionBootedEvent {
    /// Kind of the booted extension
    pub extension_type: ExtensionType,
    /// Bare extension name as the host reports it, e.g. `foo`
    pub extension_name: String,
    /// The container the host built for this extension
    pub container: Arc<dyn ServiceContainer>,
}

impl ExtensionBootedEvent {
    /// Create a new event
    pub fn new(
        extension_type: ExtensionType,
        extension_name: impl Into<String>,
        container: Arc<dyn ServiceContainer>,
    ) -> Self {
        Self {
            extension_type,
            extension_name: extension_name.into(),
            container,
        }
    }

    /// Canonical component identifier for the booted extension.
    ///
    /// The host reports the bare name (`foo`); configuration entries use
    /// the familiar `com_foo` form.
    pub fn component_id(&self) -> String {
        format!("com_{}", self.extension_name)
    }
}

impl std::fmt::Debug for ExtensionBootedEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionBootedEvent")
            .field("extension_type", &self.extension_type)
            .field("extension_name", &self.extension_name)
            .finish_non_exhaustive()
    }
}
