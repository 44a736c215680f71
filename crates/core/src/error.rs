use thiserror::Error;

/// Errors raised while configuring or resolving styles.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoulisError {
    #[error("Unknown property: {0}")]
    UnknownProperty(String),
    #[error("Unknown state \"{state}\" on property {property}")]
    UnknownState { property: String, state: String },
    #[error("Invalid style contract: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for style operations.
pub type Result<T> = std::result::Result<T, CoulisError>;
