//! Plugin bootstrap
//!
//! Composition root wiring configuration, class loader, and lifecycle
//! hook together, and subscribing the hook to the host's boot
//! notifications.

use std::sync::Arc;

use mvco_application::hook::MvcOverridePlugin;
use mvco_domain::ports::factory::MvcFactory;
use mvco_domain::ports::loader::ClassLoader;
use tracing::info;

use crate::config::PluginConfig;
use crate::dispatch::ExtensionEventDispatcher;

/// Build the override plugin from configuration and register it with the
/// dispatcher.
///
/// `B` is the host's unmodified base factory type; only bindings of
/// exactly that type are eligible for replacement.
pub fn init_plugin<B: MvcFactory>(
    config: &PluginConfig,
    loader: Arc<dyn ClassLoader>,
    dispatcher: &mut ExtensionEventDispatcher,
) -> Arc<MvcOverridePlugin> {
    let registry = config.registry();
    info!(rules = registry.len(), "initializing MVC override plugin");

    let plugin = Arc::new(MvcOverridePlugin::new::<B>(registry, loader));

    let listener = Arc::clone(&plugin);
    dispatcher.add_listener(move |event| listener.on_after_extension_boot(event));

    plugin
}
