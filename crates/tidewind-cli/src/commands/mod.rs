//! Subcommand handlers.

pub mod build;
pub mod check;
pub mod theme;
