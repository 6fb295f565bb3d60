//! Tidewind Core - configuration contract for the Tidewind utility-class generator.
//!
//! This crate owns the declarative configuration object: where to scan for
//! class usage, how to extend the built-in design-token theme, and which
//! plugins to apply. Everything downstream receives the resolved values
//! explicitly; there are no global defaults to mutate.
//!
//! # Modules
//!
//! - [`error`] - Configuration error types using thiserror
//! - [`config`] - JSON/TOML configuration loading and validation
//! - [`theme`] - Built-in theme and the `merge(base, extension)` overlay
//! - [`types`] - Shared newtypes and enums (`PluginName`, `PluginRef`, `ConfigFormat`)
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use tidewind_core::{ConfigFormat, TailwindConfig, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TailwindConfig::parse(
//!     r#"{ "content": ["*.html"], "theme": { "extend": { "spacing": { "2/5": "40%" } } } }"#,
//!     ConfigFormat::Json,
//!     Path::new("tailwind.config.json"),
//! )?;
//!
//! let theme = config.theme.resolve(&Theme::default());
//! assert_eq!(theme.spacing("2/5"), Some("40%"));
//! assert_eq!(theme.spacing("4"), Some("1rem"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod theme;
pub mod types;

// Re-export commonly used types
pub use config::{ContentConfig, LoadedConfig, TailwindConfig, ThemeConfig, CONFIG_ENV_VAR};
pub use error::{ConfigError, ConfigResult};
pub use theme::{merge, Theme, ThemeExtension};
pub use types::{ConfigFormat, PluginName, PluginRef};
