//! Extraction errors, wrapping the pure error type.

use coulis_ssr_core::SsrCoreError;
use thiserror::Error;

/// Errors raised while extracting or hydrating styles.
#[derive(Error, Debug)]
pub enum SsrError {
    #[error("Core error: {0}")]
    Core(#[from] SsrCoreError),
}

pub type Result<T> = std::result::Result<T, SsrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_display() {
        let error = SsrError::from(SsrCoreError::PayloadTooLarge { size: 10, max: 5 });
        assert_eq!(error.to_string(), format!("Core error: {}", SsrCoreError::PayloadTooLarge { size: 10, max: 5 }));
    }
}
