//! Core utilities resolved against the effective theme.
//!
//! Only the theme categories the configuration models are covered: spacing
//! (padding, margin, gap, sizing) and font family.

use tidewind_core::Theme;
use tidewind_plugins::Declaration;

/// A spacing-driven utility family.
struct SpacingUtility {
    prefix: &'static str,
    properties: &'static [&'static str],
    negatable: bool,
}

const fn spacing(
    prefix: &'static str,
    properties: &'static [&'static str],
    negatable: bool,
) -> SpacingUtility {
    SpacingUtility {
        prefix,
        properties,
        negatable,
    }
}

/// Ordered longest prefix first so `gap-x-4` is tried as `gap-x` before `gap`.
const SPACING_UTILITIES: &[SpacingUtility] = &[
    spacing("gap-x", &["column-gap"], false),
    spacing("gap-y", &["row-gap"], false),
    spacing("size", &["width", "height"], false),
    spacing("gap", &["gap"], false),
    spacing("px", &["padding-left", "padding-right"], false),
    spacing("py", &["padding-top", "padding-bottom"], false),
    spacing("pt", &["padding-top"], false),
    spacing("pr", &["padding-right"], false),
    spacing("pb", &["padding-bottom"], false),
    spacing("pl", &["padding-left"], false),
    spacing("mx", &["margin-left", "margin-right"], true),
    spacing("my", &["margin-top", "margin-bottom"], true),
    spacing("mt", &["margin-top"], true),
    spacing("mr", &["margin-right"], true),
    spacing("mb", &["margin-bottom"], true),
    spacing("ml", &["margin-left"], true),
    spacing("p", &["padding"], false),
    spacing("m", &["margin"], true),
    spacing("w", &["width"], false),
    spacing("h", &["height"], false),
];

const FONT_FAMILY_PREFIX: &str = "font-";

/// Resolve a core utility (no variants) to its declarations.
#[must_use]
pub fn resolve_core(utility: &str, negative: bool, theme: &Theme) -> Option<Vec<Declaration>> {
    resolve_spacing(utility, negative, theme).or_else(|| {
        if negative {
            None
        } else {
            resolve_font_family(utility, theme)
        }
    })
}

fn resolve_spacing(utility: &str, negative: bool, theme: &Theme) -> Option<Vec<Declaration>> {
    SPACING_UTILITIES.iter().find_map(|family| {
        if negative && !family.negatable {
            return None;
        }

        let token = utility
            .strip_prefix(family.prefix)
            .and_then(|rest| rest.strip_prefix('-'))?;
        let value = theme.spacing(token)?;
        let value = if negative {
            negate(value)
        } else {
            value.to_string()
        };

        Some(
            family
                .properties
                .iter()
                .map(|property| Declaration::new(*property, value.clone()))
                .collect(),
        )
    })
}

fn resolve_font_family(utility: &str, theme: &Theme) -> Option<Vec<Declaration>> {
    let alias = utility.strip_prefix(FONT_FAMILY_PREFIX)?;
    let stack = theme.font_family(alias)?;

    let value = stack
        .iter()
        .map(|name| quote_font_name(name))
        .collect::<Vec<_>>()
        .join(", ");

    Some(vec![Declaration::new("font-family", value)])
}

/// Quote font names that are not plain identifiers.
fn quote_font_name(name: &str) -> String {
    let already_quoted = name.len() >= 2
        && ((name.starts_with('"') && name.ends_with('"'))
            || (name.starts_with('\'') && name.ends_with('\'')));

    if already_quoted || !name.chars().any(char::is_whitespace) {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}

/// Negate a CSS length.
fn negate(value: &str) -> String {
    if let Some(positive) = value.strip_prefix('-') {
        return positive.to_string();
    }

    let is_zero = value
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%')
        .chars()
        .all(|c| c == '0' || c == '.');
    if is_zero {
        return value.to_string();
    }

    if value.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        format!("-{value}")
    } else {
        format!("calc({value} * -1)")
    }
}
