//! Service container port
//!
//! The slice of the host's per-extension DI container this library
//! touches: string keys bound to MVC factory instances. Hosts that grew a
//! service-decoration API expose it through [`ServiceContainer::extend`];
//! older hosts only support outright replacement via `get` + `set`.

use std::sync::Arc;

use crate::error::Result;
use crate::ports::factory::MvcFactory;

/// Container key the host binds its MVC factory service under
pub const MVC_FACTORY_SERVICE: &str = "mvc.factory";

/// Decorator applied to an existing factory binding
pub type FactoryDecorator<'a> =
    Box<dyn FnOnce(Arc<dyn MvcFactory>) -> Arc<dyn MvcFactory> + 'a>;

/// Per-extension service container
pub trait ServiceContainer: Send + Sync {
    /// Whether a binding exists under the key
    fn has(&self, key: &str) -> bool;

    /// Whether the binding is marked immutable by the host
    fn is_protected(&self, key: &str) -> bool;

    /// Current binding under the key, if any
    fn get(&self, key: &str) -> Option<Arc<dyn MvcFactory>>;

    /// Replace the binding under the key.
    ///
    /// Fails with a container error when the key is protected.
    fn set(&self, key: &str, factory: Arc<dyn MvcFactory>) -> Result<()>;

    /// Whether this container supports in-place service decoration
    fn supports_extend(&self) -> bool {
        false
    }

    /// Decorate the existing binding in place.
    ///
    /// Containers without decoration support keep the default, which
    /// fails; callers fall back to `get` + `set`.
    fn extend(&self, key: &str, decorate: FactoryDecorator<'_>) -> Result<()> {
        let _ = (key, decorate);
        Err(crate::error::Error::container(
            "container does not support service decoration",
        ))
    }
}
