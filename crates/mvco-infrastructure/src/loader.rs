//! Class-loader adapter
//!
//! Models the host autoloader: classes become loadable either because the
//! host preloaded them or because a source file was registered for them
//! and that file exists.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use mvco_domain::ports::loader::ClassLoader;
use tracing::debug;

/// In-memory [`ClassLoader`] implementation backed by path registrations
#[derive(Default)]
pub struct RegistryClassLoader {
    preloaded: RwLock<HashSet<String>>,
    registrations: RwLock<HashMap<String, PathBuf>>,
}

impl RegistryClassLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a class as already loadable, as the host autoloader would for
    /// classes on its own autoload map.
    pub fn preload(&self, class_name: &str) {
        self.preloaded
            .write()
            .expect("loader lock poisoned")
            .insert(class_name.to_string());
    }

    /// Source path registered for a class, if any
    pub fn registered_source(&self, class_name: &str) -> Option<PathBuf> {
        self.registrations
            .read()
            .expect("loader lock poisoned")
            .get(class_name)
            .cloned()
    }
}

impl ClassLoader for RegistryClassLoader {
    fn register(&self, class_name: &str, path: &Path) {
        let mut registrations = self.registrations.write().expect("loader lock poisoned");
        // First registration wins; repeated attempts are no-ops.
        if registrations.contains_key(class_name) {
            return;
        }
        debug!(class = %class_name, path = %path.display(), "registering class source");
        registrations.insert(class_name.to_string(), path.to_path_buf());
    }

    fn class_exists(&self, class_name: &str) -> bool {
        if self
            .preloaded
            .read()
            .expect("loader lock poisoned")
            .contains(class_name)
        {
            return true;
        }

        // A registered source only makes the class loadable when the file
        // is actually there.
        self.registrations
            .read()
            .expect("loader lock poisoned")
            .get(class_name)
            .is_some_and(|path| path.exists())
    }
}
