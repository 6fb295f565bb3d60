//! CSS output types.

use serde::Serialize;
use std::fmt::{self, Write as _};
use tidewind_plugins::Declaration;

/// One emitted rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssRule {
    /// Class the rule was generated for, as written in content
    pub class: String,
    /// Final selector, variants applied
    pub selector: String,
    /// Declarations in emission order
    pub declarations: Vec<Declaration>,
}

impl fmt::Display for CssRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector)?;
        for declaration in &self.declarations {
            writeln!(f, "  {declaration}")?;
        }
        write!(f, "}}")
    }
}

/// Generated stylesheet, rules in first-use order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stylesheet {
    /// Rules in emission order
    pub rules: Vec<CssRule>,
}

impl Stylesheet {
    /// Rule generated for `class`, if any.
    #[must_use]
    pub fn rule_for(&self, class: &str) -> Option<&CssRule> {
        self.rules.iter().find(|rule| rule.class == class)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rule was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.rules.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

/// Class selector for `class`, escaped per CSS identifier rules.
#[must_use]
pub fn class_selector(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 8);
    out.push('.');

    for (index, c) in class.chars().enumerate() {
        if index == 0 && c.is_ascii_digit() {
            // Leading digits need a code-point escape.
            let _ = write!(out, "\\{:x} ", u32::from(c));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }

    out
}
