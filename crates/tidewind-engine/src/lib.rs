//! Tidewind Engine - utility resolution and CSS emission.
//!
//! This crate turns a loaded configuration into CSS. It resolves the theme
//! and plugin list once, scans the configured content for class candidates,
//! and emits a rule for every candidate that names a utility.
//!
//! # Features
//!
//! - Spacing utilities (`p-*`, `m-*`, `gap-*`, `w-*`, `h-*`, `size-*`) and
//!   `font-*` families resolved against the effective theme
//! - Negative margins (`-mt-4`)
//! - Core and plugin-registered variants (`hover:p-4`)
//! - Plugin utilities overriding core ones, later plugins winning
//!
//! # Example
//!
//! ```rust,ignore
//! use tidewind_core::TailwindConfig;
//! use tidewind_engine::Generator;
//! use tidewind_plugins::PluginRegistry;
//!
//! let loaded = TailwindConfig::discover(".")?;
//! let generator = Generator::new(loaded, &PluginRegistry::with_builtins())?;
//!
//! let generation = generator.generate().await?;
//! println!("{}", generation.stylesheet);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod candidate;
pub mod css;
#[allow(missing_docs)]
pub mod error;
pub mod generator;
pub mod utilities;

// Re-export commonly used types
pub use candidate::{parse_candidate, ParsedCandidate};
pub use css::{class_selector, CssRule, Stylesheet};
pub use error::{EngineError, Result};
pub use generator::{Generation, Generator};
pub use utilities::resolve_core;
