//! Configuration error types.
//!
//! Every failure the configuration layer can produce is structural: the file
//! is missing, unreadable, in an unknown format, or does not have the shape
//! the generator expects. Semantic checks (CSS length syntax, glob syntax)
//! belong to generation time and are not represented here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, parsing, or validating a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration file at the expected location
    #[error("config file not found at {path}")]
    NotFound {
        /// Path where config was expected
        path: PathBuf,
    },

    /// Config file extension is not one we know how to parse
    #[error("unsupported config format for {path} (expected .json or .toml)")]
    UnsupportedFormat {
        /// Offending path
        path: PathBuf,
    },

    /// Failed to parse JSON config
    #[error("failed to parse config JSON in {path}: {source}")]
    ParseJson {
        /// Path to the config file
        path: PathBuf,
        /// JSON parse error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to parse TOML config
    #[error("failed to parse config TOML in {path}: {source}")]
    ParseToml {
        /// Path to the config file
        path: PathBuf,
        /// TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// Failed to serialize config as TOML
    #[error("failed to serialize config as TOML: {0}")]
    SerializeToml(#[from] toml::ser::Error),

    /// Failed to serialize config as JSON
    #[error("failed to serialize config as JSON: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// I/O error reading config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Dotted field path
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            field: "theme.extend.spacing".to_string(),
            reason: "token cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value for theme.extend.spacing: token cannot be empty"
        );

        let err = ConfigError::NotFound {
            path: PathBuf::from("/proj/tailwind.config.toml"),
        };
        assert_eq!(
            err.to_string(),
            "config file not found at /proj/tailwind.config.toml"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
