//! CLI error types.

use std::path::PathBuf;

use coulis_core::CoulisError;
use coulis_ssr::SsrError;
use thiserror::Error;

/// Result type alias for the CLI library.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid style document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Style error: {0}")]
    Style(#[from] CoulisError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] SsrError),
}
