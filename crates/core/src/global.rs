//! Global style rules (resets, `@import`, `@font-face`, element selectors).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::declaration::to_declaration_block;
use crate::value::Declarations;

/// The body of one global selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlobalRule {
    /// Raw text for statement at-rules: `@import url(...)`.
    Raw(String),
    /// A declaration block.
    Block(Declarations),
}

impl From<&str> for GlobalRule {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<Declarations> for GlobalRule {
    fn from(value: Declarations) -> Self {
        Self::Block(value)
    }
}

/// Selector to rule body, in author order.
pub type GlobalStyles = IndexMap<String, GlobalRule>;

/// Builds one rule per selector.
///
/// # Examples
///
/// ```
/// use coulis_core::{global_rules, GlobalRule, GlobalStyles};
///
/// let mut styles = GlobalStyles::new();
/// styles.insert("@import".to_string(), GlobalRule::from("url(reset.css)"));
/// assert_eq!(global_rules(&styles), vec!["@import url(reset.css);"]);
/// ```
pub fn global_rules(styles: &GlobalStyles) -> Vec<String> {
    styles
        .iter()
        .map(|(selector, rule)| match rule {
            GlobalRule::Raw(text) => format!("{selector} {text};"),
            GlobalRule::Block(declarations) => {
                format!("{selector}{{{}}}", to_declaration_block(declarations))
            }
        })
        .collect()
}
