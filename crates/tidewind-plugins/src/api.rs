//! Registration surface handed to plugins.

use crate::error::{PluginError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Placeholder for the utility selector in a variant template.
pub const SELECTOR_PLACEHOLDER: char = '&';

/// A single CSS `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS property name
    pub property: String,
    /// CSS value
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// A utility class registered by a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityDef {
    /// Declarations emitted for the class
    pub declarations: Vec<Declaration>,
    /// Name of the plugin that registered it
    pub plugin: String,
}

/// Utilities and variants collected from the plugin list.
///
/// Registration is last-wins: a plugin applied later replaces anything an
/// earlier plugin registered under the same name.
#[derive(Debug, Clone, Default)]
pub struct PluginApi {
    utilities: HashMap<String, UtilityDef>,
    variants: HashMap<String, String>,
    current: String,
}

impl PluginApi {
    /// Create an empty API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark which plugin subsequent registrations belong to.
    pub(crate) fn begin(&mut self, plugin: &str) {
        self.current = plugin.to_string();
    }

    /// Register a utility class.
    ///
    /// # Errors
    /// Returns `InvalidUtility` for an empty class name or an empty
    /// declaration list.
    pub fn add_utility(
        &mut self,
        class: impl Into<String>,
        declarations: Vec<Declaration>,
    ) -> Result<()> {
        let class = class.into();

        if class.is_empty() || class.chars().any(char::is_whitespace) {
            return Err(PluginError::InvalidUtility {
                plugin: self.current.clone(),
                class,
                reason: "class name must be non-empty and contain no whitespace".to_string(),
            });
        }
        if declarations.is_empty() {
            return Err(PluginError::InvalidUtility {
                plugin: self.current.clone(),
                class,
                reason: "utility must declare at least one property".to_string(),
            });
        }

        let def = UtilityDef {
            declarations,
            plugin: self.current.clone(),
        };
        if let Some(previous) = self.utilities.insert(class.clone(), def) {
            debug!(
                class = %class,
                previous = %previous.plugin,
                plugin = %self.current,
                "utility overridden by later plugin"
            );
        }

        Ok(())
    }

    /// Register a variant.
    ///
    /// `selector` is a template in which `&` stands for the utility's own
    /// selector, e.g. `&:hover` or `.group:hover &`.
    ///
    /// # Errors
    /// Returns `InvalidVariant` if the name is empty or contains `:`, or if
    /// the template lacks `&`.
    pub fn add_variant(&mut self, name: impl Into<String>, selector: impl Into<String>) -> Result<()> {
        let name = name.into();
        let selector = selector.into();

        if name.is_empty() || name.contains(':') {
            return Err(PluginError::InvalidVariant {
                plugin: self.current.clone(),
                variant: name,
                reason: "variant name must be non-empty and contain no ':'".to_string(),
            });
        }
        if !selector.contains(SELECTOR_PLACEHOLDER) {
            return Err(PluginError::InvalidVariant {
                plugin: self.current.clone(),
                variant: name,
                reason: format!("selector template '{selector}' must contain '&'"),
            });
        }

        if self.variants.insert(name.clone(), selector).is_some() {
            debug!(variant = %name, plugin = %self.current, "variant overridden by later plugin");
        }

        Ok(())
    }

    /// Look up a registered utility.
    #[must_use]
    pub fn utility(&self, class: &str) -> Option<&UtilityDef> {
        self.utilities.get(class)
    }

    /// Look up a registered variant's selector template.
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&str> {
        self.variants.get(name).map(String::as_str)
    }

    /// Number of registered utilities.
    #[must_use]
    pub fn utility_count(&self) -> usize {
        self.utilities.len()
    }

    /// Number of registered variants.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// True when nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.utilities.is_empty() && self.variants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_display() {
        assert_eq!(Declaration::new("padding", "40%").to_string(), "padding: 40%;");
    }

    #[test]
    fn test_add_and_lookup_utility() {
        let mut api = PluginApi::new();
        api.begin("demo");
        api.add_utility("sr-only", vec![Declaration::new("position", "absolute")])
            .expect("add utility");

        let def = api.utility("sr-only").expect("registered");
        assert_eq!(def.plugin, "demo");
        assert_eq!(def.declarations[0].property, "position");
        assert!(api.utility("missing").is_none());
        assert_eq!(api.utility_count(), 1);
    }

    #[test]
    fn test_later_registration_wins() {
        let mut api = PluginApi::new();
        api.begin("a");
        api.add_utility("u", vec![Declaration::new("color", "red")])
            .expect("add utility");
        api.begin("b");
        api.add_utility("u", vec![Declaration::new("color", "blue")])
            .expect("add utility");

        let def = api.utility("u").expect("registered");
        assert_eq!(def.plugin, "b");
        assert_eq!(def.declarations, vec![Declaration::new("color", "blue")]);
    }

    #[test]
    fn test_invalid_utility() {
        let mut api = PluginApi::new();
        assert!(matches!(
            api.add_utility("", vec![Declaration::new("a", "b")]),
            Err(PluginError::InvalidUtility { .. })
        ));
        assert!(matches!(
            api.add_utility("two words", vec![Declaration::new("a", "b")]),
            Err(PluginError::InvalidUtility { .. })
        ));
        assert!(matches!(
            api.add_utility("empty", Vec::new()),
            Err(PluginError::InvalidUtility { .. })
        ));
    }

    #[test]
    fn test_variant_validation() {
        let mut api = PluginApi::new();
        api.add_variant("hocus", "&:hover, &:focus").expect("add variant");
        assert_eq!(api.variant("hocus"), Some("&:hover, &:focus"));

        assert!(api.add_variant("no-amp", ":hover").is_err());
        assert!(api.add_variant("a:b", "&:hover").is_err());
        assert!(api.add_variant("", "&").is_err());
        assert_eq!(api.variant_count(), 1);
    }
}
