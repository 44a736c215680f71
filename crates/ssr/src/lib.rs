//! Style extraction - Imperative Shell.
//!
//! This crate reads a [`coulis::StyleContext`] out as `<style>` markup after
//! a server render, applies the flush-after-extract policy, and seeds
//! client contexts from that markup.
//!
//! # Architecture
//!
//! - **Functional Core** (`coulis_ssr_core`): metadata, markup parsing, config
//! - **Imperative Shell** (this crate): reading and flushing the registry
//!
//! # Example
//!
//! ```
//! use coulis::{PropertyMapping, StyleContract, StyleObject};
//! use coulis_ssr::{hydrate_from_markup, ServerContext};
//!
//! let server = ServerContext::isolated();
//! let contract = StyleContract::builder()
//!     .property("color", PropertyMapping::PassThrough)
//!     .build()?;
//! let input: StyleObject = serde_json::from_value(serde_json::json!({ "color": "red" }))?;
//! let class_names = server.context().create_styles(contract.clone()).resolve(&input)?;
//!
//! // Per-render styles are flushed once extracted
//! let html = server.extract_as_string();
//! assert!(html.contains("color:red;"));
//!
//! // The client reuses the server's rules
//! let client = hydrate_from_markup(&html)?;
//! assert_eq!(client.create_styles(contract).resolve(&input)?, class_names);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod server;

// Re-export core types for convenience
pub use coulis_ssr_core::{ExtractConfig, SsrCoreError, StyleMetadata};

// Export shell types
pub use error::{Result, SsrError};
pub use server::{hydrate_context, hydrate_from_markup, ServerContext};
