//! Tidewind command-line shell
//!
//! Thin wrapper that loads the configuration, builds a generator and
//! dispatches to a subcommand. Core logic lives in the other `crates/`.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tidewind_core::{LoadedConfig, TailwindConfig};
use tidewind_engine::Generator;
use tidewind_plugins::PluginRegistry;
use tracing::info;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tidewind", version, about = "Generate utility-class CSS from a declarative config")]
pub struct Cli {
    /// Config file (default: tailwind.config.toml or .json in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Working directory for non-relative content patterns
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate CSS
    Build {
        /// Write CSS here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the config and report what would be scanned
    Check,
    /// Print the effective theme as JSON
    Theme,
}

/// Initialize tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tidewind=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the config named on the command line, or discover one in `cwd`.
pub fn load_config(config: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    match config {
        Some(path) => TailwindConfig::load(cwd.join(path))
            .with_context(|| format!("failed to load config {}", path.display())),
        None => TailwindConfig::discover_with_env(cwd)
            .with_context(|| format!("no usable config found in {}", cwd.display())),
    }
}

/// Run the CLI.
pub async fn run(cli: Cli) -> Result<()> {
    info!("Starting Tidewind v{}", env!("CARGO_PKG_VERSION"));

    let cwd = match cli.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().context("failed to read working directory")?,
    };

    let loaded = load_config(cli.config.as_deref(), &cwd)?;
    let generator = Generator::new(loaded, &PluginRegistry::with_builtins())
        .context("failed to prepare generator")?
        .with_cwd(&cwd);

    match cli.command {
        Command::Build { output } => {
            let output = output.map(|path| cwd.join(path));
            commands::build::build(&generator, output.as_deref()).await?;
        }
        Command::Check => {
            let report = commands::check::check(&generator).await?;
            println!("{report}");
        }
        Command::Theme => {
            println!("{}", commands::theme::theme_json(&generator)?);
        }
    }

    Ok(())
}
