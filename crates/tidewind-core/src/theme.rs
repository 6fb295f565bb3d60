//! Design-token theme and the extension merge.
//!
//! The effective theme is always produced in two layers: a base theme (the
//! built-in defaults, or a category replaced wholesale by `theme.<category>`)
//! and an additive extension (`theme.extend.<category>`). The merge is
//! key-wise and shallow; an extension never drops a base key it does not
//! mention.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in spacing scale.
const DEFAULT_SPACING: &[(&str, &str)] = &[
    ("px", "1px"),
    ("0", "0px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

/// Built-in font-family table.
const DEFAULT_FONT_FAMILY: &[(&str, &[&str])] = &[
    (
        "sans",
        &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "Apple Color Emoji",
            "Segoe UI Emoji",
            "Segoe UI Symbol",
            "Noto Color Emoji",
        ],
    ),
    (
        "serif",
        &["ui-serif", "Georgia", "Cambria", "Times New Roman", "Times", "serif"],
    ),
    (
        "mono",
        &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "Liberation Mono",
            "Courier New",
            "monospace",
        ],
    ),
];

/// Resolved design tokens.
///
/// `Theme::default()` is the built-in base theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Font alias -> ordered fallback stack
    pub font_family: BTreeMap<String, Vec<String>>,
    /// Spacing token -> CSS length
    pub spacing: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY
                .iter()
                .map(|(alias, stack)| {
                    (
                        (*alias).to_string(),
                        stack.iter().map(|name| (*name).to_string()).collect(),
                    )
                })
                .collect(),
            spacing: DEFAULT_SPACING
                .iter()
                .map(|(token, value)| ((*token).to_string(), (*value).to_string()))
                .collect(),
        }
    }
}

impl Theme {
    /// Look up a spacing token.
    #[must_use]
    pub fn spacing(&self, token: &str) -> Option<&str> {
        self.spacing.get(token).map(String::as_str)
    }

    /// Look up a font stack by alias.
    #[must_use]
    pub fn font_family(&self, alias: &str) -> Option<&[String]> {
        self.font_family.get(alias).map(Vec::as_slice)
    }
}

/// Additive overlay applied on top of a base theme (`theme.extend`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeExtension {
    /// Font aliases to add or override
    pub font_family: BTreeMap<String, Vec<String>>,
    /// Spacing tokens to add or override
    pub spacing: BTreeMap<String, String>,
    /// Extended categories this generator does not model
    #[serde(flatten)]
    pub unmodeled: BTreeMap<String, serde_json::Value>,
}

impl ThemeExtension {
    /// True when the extension contributes nothing.
    ///
    /// Unmodeled categories never contribute.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_family.is_empty() && self.spacing.is_empty()
    }
}

/// Overlay `extension` onto `base`, category by category.
///
/// Extension entries are inserted or replace same-keyed base entries; base
/// entries the extension does not mention are kept. An overridden font alias
/// takes the extension's stack as-is.
#[must_use]
pub fn merge(base: &Theme, extension: &ThemeExtension) -> Theme {
    let mut theme = base.clone();

    for (alias, stack) in &extension.font_family {
        theme.font_family.insert(alias.clone(), stack.clone());
    }

    for (token, value) in &extension.spacing {
        theme.spacing.insert(token.clone(), value.clone());
    }

    for category in extension.unmodeled.keys() {
        tracing::debug!(category = %category, "ignoring unmodeled theme.extend category");
    }

    tracing::debug!(
        font_family = extension.font_family.len(),
        spacing = extension.spacing.len(),
        "merged theme extension"
    );

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing_ext(entries: &[(&str, &str)]) -> ThemeExtension {
        ThemeExtension {
            spacing: entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ..ThemeExtension::default()
        }
    }

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(theme.spacing("4"), Some("1rem"));
        assert_eq!(theme.spacing("px"), Some("1px"));
        assert_eq!(theme.spacing("0.5"), Some("0.125rem"));
        assert_eq!(theme.font_family("mono").map(|s| s[0].as_str()), Some("ui-monospace"));
        assert!(theme.font_family("content").is_none());
    }

    #[test]
    fn test_spacing_extension_is_additive() {
        let base = Theme::default();
        let ext = spacing_ext(&[("2/5", "40%"), ("4", "1.1rem")]);
        let merged = merge(&base, &ext);

        for (key, value) in &ext.spacing {
            assert_eq!(merged.spacing.get(key), Some(value));
        }
        for (key, value) in &base.spacing {
            if !ext.spacing.contains_key(key) {
                assert_eq!(merged.spacing.get(key), Some(value), "base key {key} dropped");
            }
        }
        assert_eq!(merged.spacing.len(), base.spacing.len() + 1);
    }

    #[test]
    fn test_font_override_is_not_interleaved() {
        let base = Theme::default();
        let ext = ThemeExtension {
            font_family: BTreeMap::from([
                ("sans".to_string(), vec!["Inter".to_string()]),
                (
                    "content".to_string(),
                    vec!["Inter".to_string(), "sans-serif".to_string()],
                ),
            ]),
            ..ThemeExtension::default()
        };
        let merged = merge(&base, &ext);

        assert_eq!(merged.font_family("sans"), Some(&["Inter".to_string()][..]));
        assert_eq!(
            merged.font_family("content"),
            Some(&["Inter".to_string(), "sans-serif".to_string()][..])
        );
        assert_eq!(merged.font_family("serif"), base.font_family("serif"));
        assert_eq!(merged.spacing, base.spacing);
    }

    #[test]
    fn test_empty_extension_is_identity() {
        let base = Theme::default();
        let ext = ThemeExtension::default();
        assert!(ext.is_empty());
        assert_eq!(merge(&base, &ext), base);
    }

    #[test]
    fn test_unmodeled_extend_categories_are_kept_aside() {
        let ext: ThemeExtension = serde_json::from_str(
            r#"{ "spacing": { "2/5": "40%" }, "colors": { "brand": "teal" }, "screens": {} }"#,
        )
        .expect("parse extension");

        assert_eq!(
            ext.unmodeled.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["colors", "screens"]
        );

        let merged = merge(&Theme::default(), &ext);
        assert_eq!(merged.spacing("2/5"), Some("40%"));
        assert_eq!(merged.font_family, Theme::default().font_family);
    }
}
