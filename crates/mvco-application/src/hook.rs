//! Component-boot lifecycle hook
//!
//! Listens for the host's "extension booted" notification and, when the
//! booted component has overrides configured, swaps the container's MVC
//! factory binding for a [`ResolvingFactory`]. Failed guard conditions are
//! ordinary no-ops: most components have no overrides configured.

use std::any::TypeId;
use std::sync::Arc;

use mvco_domain::error::Result;
use mvco_domain::events::{ExtensionBootedEvent, ExtensionType};
use mvco_domain::ports::container::{ServiceContainer, MVC_FACTORY_SERVICE};
use mvco_domain::ports::factory::MvcFactory;
use mvco_domain::ports::loader::ClassLoader;
use mvco_domain::rule::{OverrideRegistry, OverrideRule};
use tracing::{debug, warn};

use crate::factory::ResolvingFactory;

/// Lifecycle hook installing class-resolution overrides per component
///
/// The hook only ever replaces the host's unmodified base factory,
/// identified by exact concrete type. A binding that is anything else --
/// another plugin's customization, or an override installed by an earlier
/// boot of the same component -- is left alone.
pub struct MvcOverridePlugin {
    registry: OverrideRegistry,
    loader: Arc<dyn ClassLoader>,
    base_factory: TypeId,
}

impl MvcOverridePlugin {
    /// Create the hook.
    ///
    /// `B` is the host's unmodified base factory type; only bindings of
    /// exactly that type are eligible for replacement.
    pub fn new<B: MvcFactory>(registry: OverrideRegistry, loader: Arc<dyn ClassLoader>) -> Self {
        Self {
            registry,
            loader,
            base_factory: TypeId::of::<B>(),
        }
    }

    /// The override registry this hook consults
    pub fn registry(&self) -> &OverrideRegistry {
        &self.registry
    }

    /// Handle a "component booted" notification.
    ///
    /// Installs a [`ResolvingFactory`] when every guard passes; otherwise
    /// does nothing.
    pub fn on_after_extension_boot(&self, event: &ExtensionBootedEvent) {
        if event.extension_type != ExtensionType::Component {
            return;
        }

        let component_id = event.component_id();
        let overrides = self.registry.rules_for(&component_id);
        if overrides.is_empty() {
            return;
        }

        let container = event.container.as_ref();
        if !container.has(MVC_FACTORY_SERVICE) || container.is_protected(MVC_FACTORY_SERVICE) {
            return;
        }

        // Only the host's pristine base factory is replaced; anything else
        // is someone else's customization.
        let Some(current) = container.get(MVC_FACTORY_SERVICE) else {
            return;
        };
        if current.as_any().type_id() != self.base_factory {
            return;
        }

        match self.install_override(container, overrides) {
            Ok(()) => {
                debug!(component = %component_id, "installed MVC override factory");
            }
            Err(error) => {
                // Unexpected after the guards above; never fatal.
                warn!(component = %component_id, %error, "failed to install MVC override factory");
            }
        }
    }

    /// Install the resolving factory, decorating in place when the
    /// container supports it and replacing the binding otherwise.
    fn install_override(
        &self,
        container: &dyn ServiceContainer,
        overrides: Vec<OverrideRule>,
    ) -> Result<()> {
        let loader = Arc::clone(&self.loader);

        if container.supports_extend() {
            return container.extend(
                MVC_FACTORY_SERVICE,
                Box::new(move |current| {
                    Arc::new(ResolvingFactory::new(current, overrides, loader))
                }),
            );
        }

        let current = container.get(MVC_FACTORY_SERVICE).ok_or_else(|| {
            mvco_domain::Error::container("MVC factory binding disappeared during install")
        })?;
        container.set(
            MVC_FACTORY_SERVICE,
            Arc::new(ResolvingFactory::new(current, overrides, loader)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::path::Path;
    use std::sync::RwLock;

    use mvco_domain::ports::container::FactoryDecorator;
    use mvco_domain::Error;

    /// Base factory stub standing in for the host's pristine implementation
    struct BaseFactory;

    impl MvcFactory for BaseFactory {
        fn resolve_class_name(&self, suffix: &str, prefix: &str) -> Option<String> {
            match (suffix, prefix) {
                ("Model", "Foo") => Some("FooModel".to_string()),
                _ => None,
            }
        }

        fn namespace(&self) -> &str {
            "Vendor\\Component"
        }
    }

    /// A customized factory some other plugin installed
    struct ForeignFactory;

    impl MvcFactory for ForeignFactory {
        fn resolve_class_name(&self, _suffix: &str, _prefix: &str) -> Option<String> {
            Some("ForeignModel".to_string())
        }

        fn namespace(&self) -> &str {
            "Other\\Component"
        }
    }

    /// Loader where every class is loadable
    struct OpenLoader;

    impl ClassLoader for OpenLoader {
        fn register(&self, _class_name: &str, _path: &Path) {}

        fn class_exists(&self, _class_name: &str) -> bool {
            true
        }
    }

    /// Minimal in-memory container for hook tests
    struct TestContainer {
        bindings: RwLock<HashMap<String, Arc<dyn MvcFactory>>>,
        protected: HashSet<String>,
        extendable: bool,
    }

    impl TestContainer {
        fn with_factory(factory: Arc<dyn MvcFactory>) -> Self {
            let mut bindings = HashMap::new();
            bindings.insert(MVC_FACTORY_SERVICE.to_string(), factory);
            Self {
                bindings: RwLock::new(bindings),
                protected: HashSet::new(),
                extendable: true,
            }
        }

        fn replace_only(mut self) -> Self {
            self.extendable = false;
            self
        }

        fn protect(mut self, key: &str) -> Self {
            self.protected.insert(key.to_string());
            self
        }
    }

    impl ServiceContainer for TestContainer {
        fn has(&self, key: &str) -> bool {
            self.bindings.read().unwrap().contains_key(key)
        }

        fn is_protected(&self, key: &str) -> bool {
            self.protected.contains(key)
        }

        fn get(&self, key: &str) -> Option<Arc<dyn MvcFactory>> {
            self.bindings.read().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, factory: Arc<dyn MvcFactory>) -> Result<()> {
            if self.is_protected(key) {
                return Err(Error::container(format!("key '{key}' is protected")));
            }
            self.bindings
                .write()
                .unwrap()
                .insert(key.to_string(), factory);
            Ok(())
        }

        fn supports_extend(&self) -> bool {
            self.extendable
        }

        fn extend(&self, key: &str, decorate: FactoryDecorator<'_>) -> Result<()> {
            if !self.extendable {
                return Err(Error::container("decoration not supported"));
            }
            if self.is_protected(key) {
                return Err(Error::container(format!("key '{key}' is protected")));
            }
            let mut bindings = self.bindings.write().unwrap();
            let current = bindings
                .get(key)
                .cloned()
                .ok_or_else(|| Error::container(format!("no binding under '{key}'")))?;
            bindings.insert(key.to_string(), decorate(current));
            Ok(())
        }
    }

    fn plugin_for(component: &str) -> MvcOverridePlugin {
        let registry = OverrideRegistry::from_rules(vec![OverrideRule::new(
            component,
            "FooModel",
            "BarModel",
        )]);
        MvcOverridePlugin::new::<BaseFactory>(registry, Arc::new(OpenLoader))
    }

    fn booted(container: Arc<dyn ServiceContainer>) -> ExtensionBootedEvent {
        ExtensionBootedEvent::new(ExtensionType::Component, "foo", container)
    }

    fn current_factory(container: &dyn ServiceContainer) -> Arc<dyn MvcFactory> {
        container.get(MVC_FACTORY_SERVICE).expect("factory binding")
    }

    #[test]
    fn installs_override_for_configured_component() {
        let container = Arc::new(TestContainer::with_factory(Arc::new(BaseFactory)));
        let plugin = plugin_for("com_foo");

        plugin.on_after_extension_boot(&booted(container.clone()));

        let factory = current_factory(container.as_ref());
        assert!(factory.is::<ResolvingFactory>());
        assert_eq!(
            factory.resolve_class_name("Model", "Foo"),
            Some("BarModel".to_string())
        );
    }

    #[test]
    fn installs_via_replace_when_container_cannot_extend() {
        let container =
            Arc::new(TestContainer::with_factory(Arc::new(BaseFactory)).replace_only());
        let plugin = plugin_for("com_foo");

        plugin.on_after_extension_boot(&booted(container.clone()));

        let factory = current_factory(container.as_ref());
        assert!(factory.is::<ResolvingFactory>());
    }

    #[test]
    fn ignores_non_component_extensions() {
        let container = Arc::new(TestContainer::with_factory(Arc::new(BaseFactory)));
        let plugin = plugin_for("com_foo");

        let event = ExtensionBootedEvent::new(ExtensionType::Module, "foo", container.clone());
        plugin.on_after_extension_boot(&event);

        assert!(current_factory(container.as_ref()).is::<BaseFactory>());
    }

    #[test]
    fn ignores_components_without_rules() {
        let container = Arc::new(TestContainer::with_factory(Arc::new(BaseFactory)));
        let plugin = plugin_for("com_other");

        plugin.on_after_extension_boot(&booted(container.clone()));

        assert!(current_factory(container.as_ref()).is::<BaseFactory>());
    }

    #[test]
    fn ignores_protected_binding() {
        let container = Arc::new(
            TestContainer::with_factory(Arc::new(BaseFactory)).protect(MVC_FACTORY_SERVICE),
        );
        let plugin = plugin_for("com_foo");

        plugin.on_after_extension_boot(&booted(container.clone()));

        assert!(current_factory(container.as_ref()).is::<BaseFactory>());
    }

    #[test]
    fn ignores_missing_binding() {
        let container = Arc::new(TestContainer {
            bindings: RwLock::new(HashMap::new()),
            protected: HashSet::new(),
            extendable: true,
        });
        let plugin = plugin_for("com_foo");

        // Nothing to replace; must stay a no-op.
        plugin.on_after_extension_boot(&booted(container.clone()));
        assert!(container.get(MVC_FACTORY_SERVICE).is_none());
    }

    #[test]
    fn refuses_to_wrap_foreign_customization() {
        let container = Arc::new(TestContainer::with_factory(Arc::new(ForeignFactory)));
        let plugin = plugin_for("com_foo");

        plugin.on_after_extension_boot(&booted(container.clone()));

        assert!(current_factory(container.as_ref()).is::<ForeignFactory>());
    }

    #[test]
    fn repeated_boot_is_idempotent() {
        let container = Arc::new(TestContainer::with_factory(Arc::new(BaseFactory)));
        let plugin = plugin_for("com_foo");

        plugin.on_after_extension_boot(&booted(container.clone()));
        let first = current_factory(container.as_ref());

        // Second boot sees a ResolvingFactory, not the base type, and
        // leaves it untouched.
        plugin.on_after_extension_boot(&booted(container.clone()));
        let second = current_factory(container.as_ref());

        assert!(Arc::ptr_eq(&first, &second));
    }
}
