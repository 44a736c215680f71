//! Atomic CSS engine.
//!
//! Every declaration becomes one rule under a content-hashed class name.
//! Rules are written once into the style sheet of their scope, and scopes
//! are kept in a fixed precedence order so that shorthands, longhands and
//! conditional overrides cascade predictably.
//!
//! # Example
//!
//! ```
//! use coulis::{PropertyMapping, Scope, StyleContext, StyleContract, StyleObject};
//!
//! let context = StyleContext::in_memory();
//! let contract = StyleContract::builder()
//!     .property("color", PropertyMapping::PassThrough)
//!     .state("hover", "&:hover{decl}")
//!     .build()?;
//! let styles = context.create_styles(contract);
//!
//! let input: StyleObject = serde_json::from_value(serde_json::json!({
//!     "color": { "base": "black", "hover": "red" }
//! }))?;
//! let class_names = styles.resolve(&input)?;
//!
//! assert_eq!(class_names.split(' ').count(), 2);
//! assert_eq!(context.with_registry(|r| r.sheet(Scope::Longhand).rule_count()), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod adapter;
mod cache;
mod config;
mod context;
mod registry;
mod sheet;
mod styles;

pub use adapter::{Capability, DimensionAdapter, NoticeLog, PlatformAdapter};
pub use cache::ContentCache;
pub use config::{Config, InsertionMode, TargetPreference};
pub use context::StyleContext;
pub use registry::ScopeRegistry;
#[cfg(feature = "dom")]
pub use sheet::DomSheet;
pub use sheet::{SheetTarget, StyleSheet, VirtualSheet};
pub use styles::Styles;

pub use coulis_core::{
    to_class_name, CoulisError, CssValue, Declarations, GlobalRule, GlobalStyles, KeyframeSelector,
    Keyframes, PropertyMapping, Result, Scope, StateTemplate, StyleContract, StyleObject,
    StyleValue, TokenTree,
};
