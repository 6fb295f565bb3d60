//! Tidewind Plugins - ordered engine extensions.
//!
//! Plugins are referenced by name in the config's `plugins` list and applied
//! in that order. Each one registers utilities and variants through a
//! [`PluginApi`]; a later plugin overrides whatever an earlier one registered
//! under the same name.
//!
//! # Architecture
//!
//! - **Trait** ([`plugin`]): the `Plugin` capability and `apply_plugins` fold
//! - **API** ([`api`]): what a plugin may register
//! - **Built-ins** ([`builtin`]): `aspect-ratio`, `line-clamp`, `aria`
//! - **Registry** ([`registry`]): resolves config references to plugins
//! - **Errors** ([`error`]): plugin-specific error types
//!
//! # Example
//!
//! ```rust
//! use tidewind_core::{PluginName, PluginRef};
//! use tidewind_plugins::{apply_plugins, PluginRegistry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = PluginRegistry::with_builtins();
//! let refs = vec![PluginRef::Name(PluginName::new("aspect-ratio")?)];
//!
//! let api = apply_plugins(&registry.resolve(&refs)?)?;
//! assert!(api.utility("aspect-video").is_some());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod api;
pub mod builtin;
pub mod error;
pub mod plugin;
pub mod registry;

// Re-export commonly used types
pub use api::{Declaration, PluginApi, UtilityDef};
pub use builtin::{AriaVariants, AspectRatio, LineClamp};
pub use error::{PluginError, Result};
pub use plugin::{apply_plugins, Plugin, StaticPlugin};
pub use registry::PluginRegistry;
