//! Error types for content resolution.

use thiserror::Error;

/// Errors that can occur while resolving content sources.
#[derive(Error, Debug)]
pub enum ContentError {
    /// A `content.files` entry is not a valid glob
    #[error("invalid content pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern as written in the config
        pattern: String,
        /// Parser message
        reason: String,
    },

    /// I/O error while determining the scan anchor
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for content operations.
pub type Result<T> = std::result::Result<T, ContentError>;
