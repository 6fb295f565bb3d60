//! Name-to-plugin registry used to resolve config plugin references.

use crate::builtin::{AriaVariants, AspectRatio, LineClamp};
use crate::error::{PluginError, Result};
use crate::plugin::Plugin;
use std::collections::HashMap;
use std::sync::Arc;
use tidewind_core::{PluginName, PluginRef};
use tracing::{debug, info};

/// Plugins available to configuration files, indexed by name.
///
/// The registry is filled once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: HashMap<PluginName, Arc<dyn Plugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in plugins.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins: [Arc<dyn Plugin>; 3] =
            [Arc::new(AspectRatio), Arc::new(LineClamp), Arc::new(AriaVariants)];
        for plugin in builtins {
            registry
                .register(plugin)
                .expect("built-in plugin names are valid");
        }
        registry
    }

    /// Add or replace a plugin.
    ///
    /// # Errors
    /// Returns `InvalidName` if the plugin's name is not a valid plugin name.
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> Result<()> {
        let name = PluginName::new(plugin.name())?;
        if self.plugins.insert(name.clone(), plugin).is_some() {
            debug!(plugin = %name, "replaced registered plugin");
        } else {
            debug!(plugin = %name, "registered plugin");
        }
        Ok(())
    }

    /// Get a plugin by name.
    ///
    /// # Errors
    /// Returns `Unknown` if no plugin has that name.
    pub fn get(&self, name: &PluginName) -> Result<Arc<dyn Plugin>> {
        self.plugins
            .get(name)
            .cloned()
            .ok_or_else(|| PluginError::Unknown {
                name: name.to_string(),
            })
    }

    /// Resolve config references into plugins, keeping their order.
    ///
    /// # Errors
    /// Returns `Unknown` for the first reference the registry cannot satisfy.
    pub fn resolve(&self, refs: &[PluginRef]) -> Result<Vec<Arc<dyn Plugin>>> {
        let plugins = refs
            .iter()
            .map(|plugin_ref| self.get(plugin_ref.name()))
            .collect::<Result<Vec<_>>>()?;

        info!(count = plugins.len(), "resolved plugin list");

        Ok(plugins)
    }

    /// Check if a plugin exists in the registry.
    #[must_use]
    pub fn contains(&self, name: &PluginName) -> bool {
        self.plugins.contains_key(name)
    }

    /// Get the total number of plugins in the registry.
    #[must_use]
    pub fn count(&self) -> usize {
        self.plugins.len()
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<PluginName> {
        let mut names: Vec<PluginName> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }
}
