use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tidewind_engine::Generator;

/// Summary of a configuration check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub config_path: PathBuf,
    pub relative: bool,
    pub patterns: usize,
    pub plugins: usize,
    pub files: usize,
    pub candidates: usize,
    pub rules: usize,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "config:     {}", self.config_path.display())?;
        writeln!(
            f,
            "content:    {} pattern(s), {}",
            self.patterns,
            if self.relative {
                "relative to config"
            } else {
                "relative to cwd"
            }
        )?;
        writeln!(f, "plugins:    {}", self.plugins)?;
        writeln!(f, "files:      {}", self.files)?;
        writeln!(f, "candidates: {}", self.candidates)?;
        write!(f, "rules:      {}", self.rules)
    }
}

/// Resolve and scan content without writing anything.
pub async fn check(generator: &Generator) -> Result<CheckReport> {
    let loaded = generator.config();
    let generation = generator
        .generate()
        .await
        .context("failed to resolve content")?;

    Ok(CheckReport {
        config_path: loaded.path.clone(),
        relative: loaded.config.content.relative,
        patterns: loaded.config.content.files.len(),
        plugins: loaded.config.plugins.len(),
        files: generation.files.len(),
        candidates: generation.candidates.len(),
        rules: generation.stylesheet.len(),
    })
}
