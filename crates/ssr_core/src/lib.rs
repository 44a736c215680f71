//! Pure extraction logic - no I/O, no shared state.
//!
//! This crate provides:
//! - Style metadata (`<style>` attributes and content) with safe rendering
//! - Parsing of server-rendered `<style>` elements for hydration
//! - Extraction configuration with validation
//! - Error types for validation failures
//!
//! # Example
//!
//! ```
//! use coulis_core::Scope;
//! use coulis_ssr_core::{parse_style_elements, ExtractConfig, StyleMetadata};
//!
//! // Render one scope
//! let metadata = StyleMetadata::new(Scope::Longhand, ["c1"], ".c1{color:red;}");
//! let html = metadata.to_string();
//!
//! // Read it back on the client
//! let styles = parse_style_elements(&html).unwrap();
//! assert_eq!(styles[0].scope, Scope::Longhand);
//! assert_eq!(styles[0].class_names, vec!["c1"]);
//!
//! // The global scope is never flushed
//! assert!(ExtractConfig::new(vec![Scope::Global]).is_err());
//! ```

mod config;
mod error;
mod markup;
mod metadata;

pub use config::ExtractConfig;
pub use error::{Result, SsrCoreError, MAX_MARKUP_SIZE};
pub use markup::{parse_style_elements, HydratedStyle};
pub use metadata::{
    escape_attribute, escape_style_content, metadata_to_json, metadata_to_string, StyleMetadata,
};
