//! Generation pipeline.
//!
//! The `Generator` resolves the theme and the plugin list once, at
//! construction, and holds them immutably. A generation run then resolves
//! content sources, scans them for candidates, and turns every candidate
//! that names a utility into a CSS rule.

use crate::candidate::parse_candidate;
use crate::css::{class_selector, CssRule, Stylesheet};
use crate::error::Result;
use crate::utilities::resolve_core;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tidewind_content::{resolve_loaded, scan_files, CandidateExtractor, CandidateSet};
use tidewind_core::{LoadedConfig, Theme};
use tidewind_plugins::{apply_plugins, PluginApi, PluginRegistry};
use tracing::{debug, info};

/// Variants available without any plugin.
const CORE_VARIANTS: &[(&str, &str)] = &[
    ("hover", "&:hover"),
    ("focus", "&:focus"),
    ("active", "&:active"),
    ("disabled", "&:disabled"),
    ("first", "&:first-child"),
    ("last", "&:last-child"),
];

/// Output of one generation run.
#[derive(Debug, Clone)]
pub struct Generation {
    /// Content files that were scanned
    pub files: Vec<PathBuf>,
    /// All candidates found in them
    pub candidates: CandidateSet,
    /// Rules for the candidates that resolved
    pub stylesheet: Stylesheet,
}

/// Turns a loaded configuration into CSS.
#[derive(Debug, Clone)]
pub struct Generator {
    /// Configuration this generator was built from
    config: Arc<LoadedConfig>,
    /// Effective theme (base + overrides + extension)
    theme: Arc<Theme>,
    /// Utilities and variants contributed by plugins
    plugins: Arc<PluginApi>,
    /// Directory non-relative content patterns resolve against
    cwd: PathBuf,
    extractor: Arc<CandidateExtractor>,
}

impl Generator {
    /// Build a generator on top of the built-in theme.
    ///
    /// Plugin references are resolved against `registry` and applied in
    /// config order.
    ///
    /// # Errors
    /// Returns error if a plugin is unknown or fails to register, or if the
    /// working directory cannot be read.
    pub fn new(config: LoadedConfig, registry: &PluginRegistry) -> Result<Self> {
        Self::with_base_theme(config, registry, &Theme::default())
    }

    /// Build a generator on top of an explicit base theme.
    ///
    /// Non-relative content patterns resolve against the process working
    /// directory unless [`Self::with_cwd`] overrides it.
    pub fn with_base_theme(
        config: LoadedConfig,
        registry: &PluginRegistry,
        base: &Theme,
    ) -> Result<Self> {
        let theme = config.config.theme.resolve(base);
        let plugins = apply_plugins(&registry.resolve(&config.config.plugins)?)?;
        let cwd = std::env::current_dir()?;

        info!(
            spacing = theme.spacing.len(),
            font_family = theme.font_family.len(),
            plugin_utilities = plugins.utility_count(),
            "generator ready"
        );

        Ok(Self {
            cwd,
            config: Arc::new(config),
            theme: Arc::new(theme),
            plugins: Arc::new(plugins),
            extractor: Arc::new(CandidateExtractor::new()),
        })
    }

    /// Set the working directory used when `content.relative` is false.
    ///
    /// Defaults to the process working directory at construction.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// The effective theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &LoadedConfig {
        &self.config
    }

    /// The working directory for non-relative content patterns.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolve the configured content sources to files.
    pub fn content_files(&self) -> Result<Vec<PathBuf>> {
        Ok(resolve_loaded(&self.config, &self.cwd)?)
    }

    /// Resolve content, scan it, and generate CSS.
    pub async fn generate(&self) -> Result<Generation> {
        let files = self.content_files()?;
        let candidates = scan_files(&files, &self.extractor).await;
        let stylesheet = self.generate_from_candidates(&candidates);

        info!(
            files = files.len(),
            candidates = candidates.len(),
            rules = stylesheet.len(),
            "generation complete"
        );

        Ok(Generation {
            files,
            candidates,
            stylesheet,
        })
    }

    /// Generate rules for an already-collected candidate set.
    #[must_use]
    pub fn generate_from_candidates(&self, candidates: &CandidateSet) -> Stylesheet {
        Stylesheet {
            rules: candidates
                .iter()
                .filter_map(|candidate| self.resolve_candidate(candidate))
                .collect(),
        }
    }

    /// Resolve a single class to a rule.
    ///
    /// Returns `None` for anything that is not a known utility under known
    /// variants; content scanning is noisy, so this is not an error.
    #[must_use]
    pub fn resolve_candidate(&self, raw: &str) -> Option<CssRule> {
        let parsed = parse_candidate(raw)?;

        let declarations = if parsed.negative {
            None
        } else {
            self.plugins
                .utility(parsed.utility)
                .map(|def| def.declarations.clone())
        }
        .or_else(|| resolve_core(parsed.utility, parsed.negative, &self.theme))?;

        let mut selector = class_selector(raw);
        for variant in parsed.variants.iter().rev() {
            let Some(template) = self.variant_template(variant) else {
                debug!(class = %raw, variant = %variant, "unknown variant");
                return None;
            };
            selector = apply_variant(template, &selector);
        }

        Some(CssRule {
            class: raw.to_string(),
            selector,
            declarations,
        })
    }

    fn variant_template(&self, name: &str) -> Option<&str> {
        self.plugins.variant(name).or_else(|| {
            CORE_VARIANTS
                .iter()
                .find(|(core, _)| *core == name)
                .map(|(_, template)| *template)
        })
    }
}

/// Wrap `selector` in a variant template.
///
/// A selector list is wrapped item by item so the variant reaches every
/// item, not just the last one.
fn apply_variant(template: &str, selector: &str) -> String {
    split_selector_list(selector)
        .into_iter()
        .map(|item| template.replace('&', item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split on commas outside brackets, parentheses, and escapes.
fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut escaped = false;
    let mut start = 0;

    for (index, c) in selector.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(selector[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    items.push(selector[start..].trim());

    items
}
