//! Shared types used across the Tidewind crates.

use crate::error::{ConfigError, ConfigResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

/// On-disk encoding of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// `tailwind.config.json`
    Json,
    /// `tailwind.config.toml`
    Toml,
}

impl ConfigFormat {
    /// Pick the format from a file extension.
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for anything other than `.json` / `.toml`.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Conventional file name for this format.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "tailwind.config.json",
            Self::Toml => "tailwind.config.toml",
        }
    }
}

/// Newtype for plugin names with validation.
///
/// Plugin names are lowercase alphanumeric with hyphens, 1-64 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginName(String);

impl PluginName {
    /// Create a new `PluginName` from a string.
    ///
    /// # Errors
    /// Returns error if the name doesn't match the required format.
    pub fn new(name: impl Into<String>) -> ConfigResult<Self> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(name: &str) -> ConfigResult<()> {
        static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = NAME_REGEX
            .get_or_init(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,62}[a-z0-9])?$").expect("valid regex"));

        if regex.is_match(name) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "plugins".to_string(),
                reason: format!(
                    "plugin name must be lowercase alphanumeric with hyphens, got '{name}'"
                ),
            })
        }
    }
}

impl TryFrom<String> for PluginName {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PluginName> for String {
    fn from(name: PluginName) -> Self {
        name.0
    }
}

impl fmt::Display for PluginName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a plugin in the `plugins` list.
///
/// Written either as a bare name (`"aspect-ratio"`) or as a table
/// (`{ name = "aspect-ratio" }`). What the name refers to is decided by the
/// plugin registry, not by the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    /// Bare plugin name
    Name(PluginName),
    /// Table form
    Table {
        /// Plugin name
        name: PluginName,
    },
}

impl PluginRef {
    /// Name of the referenced plugin.
    #[must_use]
    pub fn name(&self) -> &PluginName {
        match self {
            Self::Name(name) | Self::Table { name } => name,
        }
    }
}
