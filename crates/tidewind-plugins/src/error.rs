//! Error types for the plugin subsystem.

use thiserror::Error;

/// Errors that can occur while resolving or applying plugins.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Config references a plugin the registry does not know
    #[error("unknown plugin: {name}")]
    Unknown {
        /// Name as written in the config
        name: String,
    },

    /// Plugin tried to register a malformed variant
    #[error("plugin {plugin} registered invalid variant '{variant}': {reason}")]
    InvalidVariant {
        /// Registering plugin
        plugin: String,
        /// Variant name
        variant: String,
        /// Reason for rejection
        reason: String,
    },

    /// Plugin tried to register a malformed utility
    #[error("plugin {plugin} registered invalid utility '{class}': {reason}")]
    InvalidUtility {
        /// Registering plugin
        plugin: String,
        /// Utility class name
        class: String,
        /// Reason for rejection
        reason: String,
    },

    /// Plugin name does not satisfy naming rules
    #[error("invalid plugin name: {0}")]
    InvalidName(#[from] tidewind_core::ConfigError),
}

/// Result type for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;
