//! In-memory service container
//!
//! A host-shaped container adapter holding MVC factory bindings behind an
//! interior lock, with a protected-key set and optional support for
//! in-place service decoration.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use mvco_domain::error::{Error, Result};
use mvco_domain::ports::container::{FactoryDecorator, ServiceContainer};
use mvco_domain::ports::factory::MvcFactory;

/// In-memory [`ServiceContainer`] implementation
pub struct MemoryServiceContainer {
    bindings: RwLock<HashMap<String, Arc<dyn MvcFactory>>>,
    protected: RwLock<HashSet<String>>,
    extendable: bool,
}

impl MemoryServiceContainer {
    /// Create an empty container with decoration support
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
            protected: RwLock::new(HashSet::new()),
            extendable: true,
        }
    }

    /// Create a container without decoration support; bindings can only
    /// be replaced outright.
    pub fn replace_only() -> Self {
        Self {
            extendable: false,
            ..Self::new()
        }
    }

    /// Bind a factory under a key, bypassing protection checks.
    ///
    /// Host-side setup operation, not part of the [`ServiceContainer`]
    /// contract.
    pub fn bind(&self, key: &str, factory: Arc<dyn MvcFactory>) {
        self.bindings
            .write()
            .expect("container lock poisoned")
            .insert(key.to_string(), factory);
    }

    /// Mark a key as immutable
    pub fn protect(&self, key: &str) {
        self.protected
            .write()
            .expect("container lock poisoned")
            .insert(key.to_string());
    }
}

impl Default for MemoryServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceContainer for MemoryServiceContainer {
    fn has(&self, key: &str) -> bool {
        self.bindings
            .read()
            .expect("container lock poisoned")
            .contains_key(key)
    }

    fn is_protected(&self, key: &str) -> bool {
        self.protected
            .read()
            .expect("container lock poisoned")
            .contains(key)
    }

    fn get(&self, key: &str) -> Option<Arc<dyn MvcFactory>> {
        self.bindings
            .read()
            .expect("container lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, factory: Arc<dyn MvcFactory>) -> Result<()> {
        if self.is_protected(key) {
            return Err(Error::container(format!("key '{key}' is protected")));
        }
        self.bindings
            .write()
            .expect("container lock poisoned")
            .insert(key.to_string(), factory);
        Ok(())
    }

    fn supports_extend(&self) -> bool {
        self.extendable
    }

    fn extend(&self, key: &str, decorate: FactoryDecorator<'_>) -> Result<()> {
        if !self.extendable {
            return Err(Error::container(
                "container does not support service decoration",
            ));
        }
        if self.is_protected(key) {
            return Err(Error::container(format!("key '{key}' is protected")));
        }

        let mut bindings = self.bindings.write().expect("container lock poisoned");
        let current = bindings
            .get(key)
            .cloned()
            .ok_or_else(|| Error::container(format!("no binding under '{key}'")))?;
        bindings.insert(key.to_string(), decorate(current));
        Ok(())
    }
}
