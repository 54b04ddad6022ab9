//! Lifecycle event dispatch
//!
//! A minimal synchronous dispatcher for "extension booted" notifications.
//! Listeners run in registration order, each to completion, before the
//! dispatch returns to the host.

use mvco_domain::events::ExtensionBootedEvent;

/// Listener invoked for each booted extension
pub type BootListener = Box<dyn Fn(&ExtensionBootedEvent) + Send + Sync>;

/// Ordered synchronous dispatcher for [`ExtensionBootedEvent`]
#[derive(Default)]
pub struct ExtensionEventDispatcher {
    listeners: Vec<BootListener>,
}

impl ExtensionEventDispatcher {
    /// Create a dispatcher with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; listeners run in registration order
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&ExtensionBootedEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch one notification to every listener, synchronously
    pub fn dispatch_booted(&self, event: &ExtensionBootedEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}
