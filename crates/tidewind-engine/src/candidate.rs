#![allow(clippy::must_use_candidate)]

/// Separator between variants and the utility, e.g. `hover:p-4`.
pub const VARIANT_SEPARATOR: char = ':';

/// A class candidate split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCandidate<'a> {
    /// The full class as written
    pub raw: &'a str,
    /// Variant names, outermost first
    pub variants: Vec<&'a str>,
    /// Leading `-` on the utility
    pub negative: bool,
    /// Utility name without variants or sign
    pub utility: &'a str,
}

/// Split `raw` into variants, sign and utility.
///
/// Returns `None` when any part is empty (`hover:`, `:p-4`, `-`).
pub fn parse_candidate(raw: &str) -> Option<ParsedCandidate<'_>> {
    let mut parts: Vec<&str> = raw.split(VARIANT_SEPARATOR).collect();
    let last = parts.pop()?;

    if parts.iter().any(|variant| variant.is_empty()) {
        return None;
    }

    let (negative, utility) = match last.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, last),
    };

    if utility.is_empty() || utility.starts_with('-') {
        return None;
    }

    Some(ParsedCandidate {
        raw,
        variants: parts,
        negative,
        utility,
    })
}
