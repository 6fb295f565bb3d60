//! The plugin capability trait and ordered application.

use crate::api::{Declaration, PluginApi};
use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// An engine extension.
///
/// A plugin contributes utilities and variants through [`PluginApi`]. It is
/// applied exactly once, in the position it holds in the config's plugin
/// list.
pub trait Plugin: fmt::Debug + Send + Sync {
    /// Name the plugin is referenced by in config files.
    fn name(&self) -> &str;

    /// Register this plugin's utilities and variants.
    fn register(&self, api: &mut PluginApi) -> Result<()>;
}

/// Fold the plugin list into a single [`PluginApi`], first to last.
///
/// Later plugins override utilities and variants registered by earlier ones.
/// An empty list yields an empty API.
pub fn apply_plugins(plugins: &[Arc<dyn Plugin>]) -> Result<PluginApi> {
    let api = plugins.iter().try_fold(PluginApi::new(), |mut api, plugin| {
        api.begin(plugin.name());
        plugin.register(&mut api)?;
        debug!(plugin = %plugin.name(), "applied plugin");
        Ok::<_, crate::error::PluginError>(api)
    })?;

    info!(
        plugins = plugins.len(),
        utilities = api.utility_count(),
        variants = api.variant_count(),
        "applied plugins"
    );

    Ok(api)
}

/// A plugin defined by a fixed table of utilities and variants.
///
/// Useful for embedding project-specific utilities without writing a new
/// type.
#[derive(Debug, Clone, Default)]
pub struct StaticPlugin {
    name: String,
    utilities: Vec<(String, Vec<Declaration>)>,
    variants: Vec<(String, String)>,
}

impl StaticPlugin {
    /// Create an empty plugin with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a utility.
    #[must_use]
    pub fn utility(mut self, class: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        self.utilities.push((class.into(), declarations));
        self
    }

    /// Add a variant.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>, selector: impl Into<String>) -> Self {
        self.variants.push((name.into(), selector.into()));
        self
    }
}

impl Plugin for StaticPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn register(&self, api: &mut PluginApi) -> Result<()> {
        for (class, declarations) in &self.utilities {
            api.add_utility(class.clone(), declarations.clone())?;
        }
        for (name, selector) in &self.variants {
            api.add_variant(name.clone(), selector.clone())?;
        }
        Ok(())
    }
}
