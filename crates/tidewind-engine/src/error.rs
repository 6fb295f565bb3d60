use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Config error: {0}")]
    Config(#[from] tidewind_core::ConfigError),

    #[error("Content error: {0}")]
    Content(#[from] tidewind_content::ContentError),

    #[error("Plugin error: {0}")]
    Plugin(#[from] tidewind_plugins::PluginError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
