//! Class loader port
//!
//! Associates class names with source files so that referencing a class
//! triggers loading that file, mirroring the host autoloader.

use std::path::Path;

/// Host class loader
pub trait ClassLoader: Send + Sync {
    /// Register a source path for a class name.
    ///
    /// Idempotent: registering an already-known class is a no-op and safe
    /// to attempt repeatedly.
    fn register(&self, class_name: &str, path: &Path);

    /// Whether the class is currently loadable
    fn class_exists(&self, class_name: &str) -> bool;
}
