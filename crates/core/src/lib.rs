//! Pure core of the coulis atomic CSS engine - no I/O, no shared state.
//!
//! This crate provides:
//! - Declaration formatting (`camelCase` to `kebab-case`, unit defaulting)
//! - Class-name hashing (32-bit FNV-1a)
//! - Scopes and rule routing
//! - Validated style contracts
//! - Rule builders for keyframes, global styles and custom properties
//!
//! # Example
//!
//! ```
//! use coulis_core::{to_class_name, to_declaration, CssValue, Scope};
//!
//! let declaration = to_declaration("paddingTop", &CssValue::from(8));
//! assert_eq!(declaration, "padding-top:8px;");
//!
//! let class_name = to_class_name(&declaration);
//! let rule = format!(".{class_name}{{{declaration}}}");
//! assert_eq!(Scope::for_rule("paddingTop", &rule), Scope::Longhand);
//! ```

mod contract;
mod custom_properties;
mod declaration;
mod error;
mod global;
mod hash;
mod hydration;
mod keyframes;
mod minify;
mod scope;
mod value;

pub use contract::{
    base_rule, PropertyMapping, StateTemplate, StyleContract, StyleContractBuilder, BASE_STATE,
    DECLARATION_PLACEHOLDER, SELECTOR_PLACEHOLDER,
};
pub use custom_properties::{
    escape_identifier, flatten_custom_properties, root_rule, CustomProperties, TokenTree,
};
pub use declaration::{
    is_custom_property, is_unitless, to_declaration, to_declaration_block, to_kebab_case,
};
pub use error::{CoulisError, Result};
pub use global::{global_rules, GlobalRule, GlobalStyles};
pub use hash::{fnv1a32, to_class_name, CLASS_NAME_PREFIX};
pub use hydration::{join_class_list, parse_class_list, CACHE_ATTRIBUTE, TYPE_ATTRIBUTE};
pub use keyframes::{keyframe_selector, keyframes_rule, KeyframeSelector, Keyframes};
pub use minify::minify;
pub use scope::{is_shorthand_property, Scope};
pub use value::{format_number, CssValue, Declarations, StyleObject, StyleValue};
