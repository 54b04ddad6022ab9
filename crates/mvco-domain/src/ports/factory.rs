//! MVC factory port
//!
//! The class-resolution service this library decorates. The host's base
//! factory exposes its internal configuration through explicit accessors
//! (`namespace`, `attachments`) so a decorator can carry it forward
//! without reaching into private state.

use std::any::Any;
use std::sync::Arc;

use downcast_rs::{impl_downcast, DowncastSync};

/// Class-resolution service for MVC role requests
///
/// Maps an abstract role request, e.g. suffix `"Model"` for prefix
/// `"Articles"`, to a concrete class name. `DowncastSync` lets callers
/// check the exact concrete type behind a container binding.
pub trait MvcFactory: DowncastSync {
    /// Resolve the class name for the given (suffix, prefix) role request.
    ///
    /// Returns `None` when no class exists for the role; absence is not an
    /// error.
    fn resolve_class_name(&self, suffix: &str, prefix: &str) -> Option<String>;

    /// Root namespace this factory resolves classes under
    fn namespace(&self) -> &str;

    /// Auxiliary configuration carried by this factory.
    ///
    /// Factories with no logger or sub-factories configured return the
    /// empty default.
    fn attachments(&self) -> FactoryAttachments {
        FactoryAttachments::default()
    }
}

impl_downcast!(sync MvcFactory);

/// Host logger a factory may carry
pub trait FactoryLogger: Send + Sync {
    /// Log a message at the given host-defined level
    fn log(&self, level: &str, message: &str);
}

/// Sub-factory slots a factory may carry besides class resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubFactoryKind {
    /// Form factory
    Form,
    /// Dispatcher factory
    Dispatcher,
    /// Router factory
    Router,
    /// User factory
    User,
    /// Mailer factory
    Mailer,
    /// Database factory
    Database,
    /// Cache controller factory
    Cache,
}

/// Opaque handle to a host sub-factory
pub type SubFactoryHandle = Arc<dyn Any + Send + Sync>;

/// Auxiliary configuration a factory carries besides class resolution
///
/// Every item is optional; a factory that never had a logger or a given
/// sub-factory configured simply leaves the slot unset.
#[derive(Clone, Default)]
pub struct FactoryAttachments {
    logger: Option<Arc<dyn FactoryLogger>>,
    sub_factories: Vec<(SubFactoryKind, SubFactoryHandle)>,
}

impl FactoryAttachments {
    /// Create an empty attachment set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host logger
    pub fn with_logger(mut self, logger: Arc<dyn FactoryLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Attach a sub-factory handle
    pub fn with_sub_factory(mut self, kind: SubFactoryKind, handle: SubFactoryHandle) -> Self {
        self.sub_factories.retain(|(existing, _)| *existing != kind);
        self.sub_factories.push((kind, handle));
        self
    }

    /// The attached host logger, if any
    pub fn logger(&self) -> Option<&Arc<dyn FactoryLogger>> {
        self.logger.as_ref()
    }

    /// The attached sub-factory of the given kind, if any
    pub fn sub_factory(&self, kind: SubFactoryKind) -> Option<&SubFactoryHandle> {
        self.sub_factories
            .iter()
            .find(|(existing, _)| *existing == kind)
            .map(|(_, handle)| handle)
    }

    /// Whether nothing is attached
    pub fn is_empty(&self) -> bool {
        self.logger.is_none() && self.sub_factories.is_empty()
    }
}

impl std::fmt::Debug for FactoryAttachments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactoryAttachments")
            .field("logger", &self.logger.is_some())
            .field(
                "sub_factories",
                &self
                    .sub_factories
                    .iter()
                    .map(|(kind, _)| *kind)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
