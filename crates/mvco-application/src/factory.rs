//! Resolving factory decorator
//!
//! Wraps the factory it supersedes: the base resolution runs first, and a
//! configured override substitutes the replacement class name when the
//! replacement is loadable. Everything unrelated to class-name resolution
//! is forwarded to the wrapped factory unchanged.

use std::sync::Arc;

use mvco_domain::ports::factory::{FactoryAttachments, MvcFactory};
use mvco_domain::ports::loader::ClassLoader;
use mvco_domain::rule::OverrideRule;
use tracing::debug;

/// MVC factory decorator that applies class-resolution overrides
pub struct ResolvingFactory {
    inner: Arc<dyn MvcFactory>,
    overrides: Vec<OverrideRule>,
    loader: Arc<dyn ClassLoader>,
}

impl ResolvingFactory {
    /// Wrap a factory with the overrides configured for one component
    pub fn new(
        inner: Arc<dyn MvcFactory>,
        overrides: Vec<OverrideRule>,
        loader: Arc<dyn ClassLoader>,
    ) -> Self {
        Self {
            inner,
            overrides,
            loader,
        }
    }

    /// The factory this one supersedes
    pub fn inner(&self) -> &Arc<dyn MvcFactory> {
        &self.inner
    }

    /// The override subset bound to this factory
    pub fn overrides(&self) -> &[OverrideRule] {
        &self.overrides
    }

    /// Replacement class for a resolved name, when a loadable one is
    /// configured.
    fn replacement_for(&self, class_name: &str) -> Option<String> {
        let rule = self
            .overrides
            .iter()
            .find(|rule| rule.matches_class(class_name))?;

        // Lazy source registration; the existence pre-check keeps it to
        // one registration per replacement class.
        if let Some(path) = rule.replacement_source() {
            if !self.loader.class_exists(&rule.replacement_class) {
                self.loader.register(&rule.replacement_class, path);
            }
        }

        if self.loader.class_exists(&rule.replacement_class) {
            debug!(
                target_class = %class_name,
                replacement_class = %rule.replacement_class,
                "substituting overridden class"
            );
            return Some(rule.replacement_class.clone());
        }

        // Replacement still unloadable; behave as if no override existed.
        None
    }
}

impl MvcFactory for ResolvingFactory {
    fn resolve_class_name(&self, suffix: &str, prefix: &str) -> Option<String> {
        // Overrides never invent classes the base cannot resolve.
        let class_name = self.inner.resolve_class_name(suffix, prefix)?;

        match self.replacement_for(&class_name) {
            Some(replacement) => Some(replacement),
            None => Some(class_name),
        }
    }

    fn namespace(&self) -> &str {
        self.inner.namespace()
    }

    fn attachments(&self) -> FactoryAttachments {
        self.inner.attachments()
    }
}
