//! Custom property (design token) flattening.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::CssValue;

/// A nested token tree. Leaves are values, branches group them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenTree {
    Leaf(CssValue),
    Branch(IndexMap<String, TokenTree>),
}

impl TokenTree {
    /// Returns the leaf value, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&CssValue> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    /// Returns the child at `key`, if this is a branch.
    pub fn get(&self, key: &str) -> Option<&TokenTree> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(children) => children.get(key),
        }
    }
}

impl From<CssValue> for TokenTree {
    fn from(value: CssValue) -> Self {
        Self::Leaf(value)
    }
}

impl From<&str> for TokenTree {
    fn from(value: &str) -> Self {
        Self::Leaf(value.into())
    }
}

impl From<f64> for TokenTree {
    fn from(value: f64) -> Self {
        Self::Leaf(value.into())
    }
}

/// Flattened `(--name, value)` pairs in tree order.
pub type CustomProperties = Vec<(String, CssValue)>;

/// Backslash-escapes characters that are not valid in a CSS identifier.
///
/// # Examples
///
/// ```
/// use coulis_core::escape_identifier;
///
/// assert_eq!(escape_identifier("space.1"), "space\\.1");
/// assert_eq!(escape_identifier("primary_500"), "primary_500");
/// ```
pub fn escape_identifier(segment: &str) -> String {
    let mut output = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            output.push(c);
        } else {
            output.push('\\');
            output.push(c);
        }
    }
    output
}

/// Flattens a token tree into custom properties and mirrors it with
/// `var(--name)` references at every leaf.
///
/// Names are the escaped path segments joined by `-`.
pub fn flatten_custom_properties(
    tokens: &IndexMap<String, TokenTree>,
) -> (CustomProperties, IndexMap<String, TokenTree>) {
    let mut properties = CustomProperties::new();
    let mirror = flatten_branch(tokens, "-", &mut properties);
    (properties, mirror)
}

fn flatten_branch(
    branch: &IndexMap<String, TokenTree>,
    prefix: &str,
    properties: &mut CustomProperties,
) -> IndexMap<String, TokenTree> {
    branch
        .iter()
        .map(|(key, node)| {
            let name = format!("{prefix}-{}", escape_identifier(key));
            let mirrored = match node {
                TokenTree::Leaf(value) => {
                    let reference = TokenTree::Leaf(CssValue::Text(format!("var({name})")));
                    properties.push((name, value.clone()));
                    reference
                }
                TokenTree::Branch(children) => {
                    TokenTree::Branch(flatten_branch(children, &name, properties))
                }
            };
            (key.clone(), mirrored)
        })
        .collect()
}

/// Builds the `:root{...}` rule declaring the properties.
pub fn root_rule(properties: &CustomProperties) -> String {
    let body: String = properties
        .iter()
        .map(|(name, value)| format!("{name}:{value};"))
        .collect();
    format!(":root{{{body}}}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> IndexMap<String, TokenTree> {
        serde_json::from_value(serde_json::json!({
            "colors": {
                "primary": "#0055ff",
                "gray": { "100": "#f5f5f5", "900": "#111" }
            },
            "space": { "0.5": "2px", "1": "4px" },
            "zIndex": 10
        }))
        .unwrap()
    }

    #[test]
    fn test_flatten_names() {
        let (properties, _) = flatten_custom_properties(&tokens());
        let names: Vec<&str> = properties.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "--colors-primary",
                "--colors-gray-100",
                "--colors-gray-900",
                "--space-0\\.5",
                "--space-1",
                "--zIndex",
            ]
        );
    }

    #[test]
    fn test_mirror_references() {
        let (_, mirror) = flatten_custom_properties(&tokens());
        let primary = mirror["colors"].get("primary").and_then(TokenTree::as_leaf);
        assert_eq!(primary, Some(&CssValue::from("var(--colors-primary)")));

        let half = mirror["space"].get("0.5").and_then(TokenTree::as_leaf);
        assert_eq!(half, Some(&CssValue::from("var(--space-0\\.5)")));

        assert_eq!(mirror["zIndex"], TokenTree::from("var(--zIndex)"));
    }

    #[test]
    fn test_root_rule() {
        let properties = vec![
            ("--a".to_string(), CssValue::from(1)),
            ("--b".to_string(), CssValue::from("2px")),
        ];
        assert_eq!(root_rule(&properties), ":root{--a:1;--b:2px;}");
    }

    #[test]
    fn test_escape_identifier() {
        assert_eq!(escape_identifier("a b"), "a\\ b");
        assert_eq!(escape_identifier("1/2"), "1\\/2");
        assert_eq!(escape_identifier("ünïcode"), "ünïcode");
    }
}
