//! Output formatting functions.

pub mod json;
pub mod pretty;

use coulis_ssr::StyleMetadata;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::run::{HashReport, Resolution};

/// Format a resolved document.
pub fn format_resolution(resolution: &Resolution, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(resolution),
        OutputFormat::Pretty => Ok(pretty::format_resolution(resolution)),
    }
}

/// Format extracted style metadata: a JSON array, or the `<style>` markup.
pub fn format_metadata(metadata: &[StyleMetadata], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(metadata),
        OutputFormat::Pretty => Ok(pretty::format_metadata(metadata)),
    }
}

/// Format a hash report.
pub fn format_hash(report: &HashReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_json(report),
        OutputFormat::Pretty => Ok(pretty::format_hash(report)),
    }
}
