//! Core extraction error types (pure - no I/O variants).

use thiserror::Error;

/// Maximum size of server markup accepted for hydration (5MB).
pub const MAX_MARKUP_SIZE: usize = 5 * 1024 * 1024;

/// Core extraction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SsrCoreError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Metadata serialization failed: {0}")]
    Serialization(String),

    #[error("Unknown style scope: {0}")]
    UnknownScope(String),

    #[error("Unterminated <style> element at byte {0}")]
    UnterminatedStyle(usize),

    #[error("Markup too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, SsrCoreError>;
