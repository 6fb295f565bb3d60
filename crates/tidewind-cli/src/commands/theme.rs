use anyhow::{Context, Result};
use tidewind_engine::Generator;

/// The effective theme as pretty-printed JSON.
pub fn theme_json(generator: &Generator) -> Result<String> {
    serde_json::to_string_pretty(generator.theme()).context("failed to serialize theme")
}
