//! The generator configuration object.
//!
//! A configuration file is read once, parsed into [`TailwindConfig`] and never
//! mutated afterwards. JSON and TOML encodings share the same camelCase shape:
//!
//! ```toml
//! plugins = []
//!
//! [content]
//! relative = true
//! files = ["*.html", "./**/src/**/*.rs"]
//!
//! [theme.extend.fontFamily]
//! content = ["Inter", "sans-serif"]
//!
//! [theme.extend.spacing]
//! "2/5" = "40%"
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::theme::{merge, Theme, ThemeExtension};
use crate::types::{ConfigFormat, PluginRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable that overrides config discovery.
pub const CONFIG_ENV_VAR: &str = "TIDEWIND_CONFIG";

/// Root configuration object.
///
/// `content` is required; there is no useful generation without a content
/// source list, so a file without it is rejected at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    /// Where to look for class usage
    pub content: ContentConfig,
    /// Theme overrides and extensions
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Ordered plugin references; later entries take precedence
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
}

impl TailwindConfig {
    /// Parse configuration text in the given format.
    ///
    /// `origin` is only used for error messages.
    ///
    /// # Errors
    /// Returns a parse error if the text does not match the expected shape.
    pub fn parse(contents: &str, format: ConfigFormat, origin: &Path) -> ConfigResult<Self> {
        match format {
            ConfigFormat::Json => {
                serde_json::from_str(contents).map_err(|source| ConfigError::ParseJson {
                    path: origin.to_path_buf(),
                    source,
                })
            }
            ConfigFormat::Toml => toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
                path: origin.to_path_buf(),
                source,
            }),
        }
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    /// Returns error if:
    /// - The file does not exist or cannot be read
    /// - The extension is neither `.json` nor `.toml`
    /// - The contents are structurally invalid
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<LoadedConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;

        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents, format, path)?;
        config.validate()?;

        info!(
            path = %path.display(),
            files = config.content.files.len(),
            relative = config.content.relative,
            plugins = config.plugins.len(),
            "loaded config"
        );

        Ok(LoadedConfig {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Find and load the configuration for a project directory.
    ///
    /// Looks for `tailwind.config.toml`, then `tailwind.config.json`.
    ///
    /// # Errors
    /// Returns `NotFound` if neither exists, or any error from [`Self::load`].
    pub fn discover(dir: impl AsRef<Path>) -> ConfigResult<LoadedConfig> {
        let dir = dir.as_ref();

        for format in [ConfigFormat::Toml, ConfigFormat::Json] {
            let candidate = dir.join(format.file_name());
            if candidate.is_file() {
                return Self::load(candidate);
            }
        }

        Err(ConfigError::NotFound {
            path: dir.join(ConfigFormat::Toml.file_name()),
        })
    }

    /// Like [`Self::discover`], but `TIDEWIND_CONFIG` wins when set.
    ///
    /// A relative `TIDEWIND_CONFIG` path is taken relative to `dir`.
    pub fn discover_with_env(dir: impl AsRef<Path>) -> ConfigResult<LoadedConfig> {
        let dir = dir.as_ref();

        if let Ok(val) = std::env::var(CONFIG_ENV_VAR) {
            if !val.is_empty() {
                debug!("Override config path from env: {}", val);
                return Self::load(dir.join(val));
            }
        }

        Self::discover(dir)
    }

    /// Check field values the type system cannot express.
    ///
    /// Only structure is checked; CSS length syntax and glob syntax are
    /// left to generation time.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(font_family) = &self.theme.font_family {
            validate_font_family("theme.fontFamily", font_family)?;
        }
        if let Some(spacing) = &self.theme.spacing {
            validate_spacing("theme.spacing", spacing)?;
        }
        validate_font_family("theme.extend.fontFamily", &self.theme.extend.font_family)?;
        validate_spacing("theme.extend.spacing", &self.theme.extend.spacing)?;

        for (index, pattern) in self.content.files.iter().enumerate() {
            if pattern.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("content.files[{index}]"),
                    reason: "pattern cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize back to JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn validate_font_family(field: &str, table: &BTreeMap<String, Vec<String>>) -> ConfigResult<()> {
    for (alias, stack) in table {
        if alias.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: "font alias cannot be empty".to_string(),
            });
        }
        if stack.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("{field}.{alias}"),
                reason: "font stack must name at least one font".to_string(),
            });
        }
        if stack.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("{field}.{alias}"),
                reason: "font names cannot be empty".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_spacing(field: &str, table: &BTreeMap<String, String>) -> ConfigResult<()> {
    for (token, value) in table {
        if token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: field.to_string(),
                reason: "spacing token cannot be empty".to_string(),
            });
        }
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("{field}.{token}"),
                reason: "spacing value cannot be empty".to_string(),
            });
        }
    }
    Ok(())
}

/// A parsed configuration together with the file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// Parsed configuration
    pub config: TailwindConfig,
    /// Path the configuration was read from
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory containing the configuration file.
    ///
    /// A bare file name yields `"."`.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

/// Content sources to scan for class usage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContentRepr")]
pub struct ContentConfig {
    /// Resolve `files` against the config file's directory instead of the
    /// process working directory
    pub relative: bool,
    /// Glob patterns in insertion order; a leading `!` excludes
    pub files: Vec<String>,
}

/// Accepted spellings of `content`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentRepr {
    Full {
        #[serde(default)]
        relative: bool,
        files: Vec<String>,
    },
    Files(Vec<String>),
}

impl From<ContentRepr> for ContentConfig {
    fn from(repr: ContentRepr) -> Self {
        match repr {
            ContentRepr::Full { relative, files } => Self { relative, files },
            ContentRepr::Files(files) => Self {
                relative: false,
                files,
            },
        }
    }
}

/// The `theme` section.
///
/// A category set directly on `theme` replaces the built-in table; a
/// category under `theme.extend` is merged into it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Replacement font-family table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<BTreeMap<String, Vec<String>>>,
    /// Replacement spacing scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<BTreeMap<String, String>>,
    /// Additive overlay
    pub extend: ThemeExtension,
    /// Categories this generator does not model (colors, screens, ...)
    #[serde(flatten)]
    pub unmodeled: BTreeMap<String, serde_json::Value>,
}

impl ThemeConfig {
    /// Produce the effective theme from `base`.
    ///
    /// Replacement categories are applied first, then the extension is merged.
    #[must_use]
    pub fn resolve(&self, base: &Theme) -> Theme {
        let mut theme = base.clone();

        if let Some(font_family) = &self.font_family {
            debug!(count = font_family.len(), "replacing base font-family table");
            theme.font_family = font_family.clone();
        }
        if let Some(spacing) = &self.spacing {
            debug!(count = spacing.len(), "replacing base spacing scale");
            theme.spacing = spacing.clone();
        }
        for category in self.unmodeled.keys() {
            debug!(category = %category, "ignoring unmodeled theme category");
        }

        merge(&theme, &self.extend)
    }
}
