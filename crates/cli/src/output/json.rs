//! JSON output formatting.

use serde::Serialize;

use crate::error::Result;

/// Serializes a report on one line.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
