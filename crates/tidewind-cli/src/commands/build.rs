use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tidewind_engine::{Generation, Generator};
use tracing::info;

/// Generate CSS and write it to `output`, or stdout when `None`.
pub async fn build(generator: &Generator, output: Option<&Path>) -> Result<Generation> {
    let generation = generator
        .generate()
        .await
        .context("failed to generate CSS")?;
    let css = generation.stylesheet.to_string();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(path, &css).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), rules = generation.stylesheet.len(), "wrote stylesheet");
        }
        None => print!("{css}"),
    }

    Ok(generation)
}
