//! Tidewind Content
//!
//! Resolves `content.files` into concrete files and extracts class candidates
//! from them.

pub mod error;
pub mod extract;
pub mod resolve;

// Re-export main types
pub use error::{ContentError, Result};
pub use extract::{scan_file, scan_files, CandidateExtractor, CandidateSet, FileCandidates};
pub use resolve::{anchor_dir, resolve_content, resolve_from_current_dir, resolve_loaded};
