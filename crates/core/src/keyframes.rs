//! Keyframes rule building.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::declaration::to_declaration_block;
use crate::value::{format_number, Declarations};

/// The selector of one keyframe step: a percentage or a keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyframeSelector {
    Percent(f64),
    Named(String),
}

impl KeyframeSelector {
    fn key(&self) -> String {
        match self {
            Self::Percent(p) => format_number(*p),
            Self::Named(name) => name.clone(),
        }
    }
}

impl From<f64> for KeyframeSelector {
    fn from(value: f64) -> Self {
        Self::Percent(value)
    }
}

impl From<i32> for KeyframeSelector {
    fn from(value: i32) -> Self {
        Self::Percent(f64::from(value))
    }
}

impl From<&str> for KeyframeSelector {
    fn from(value: &str) -> Self {
        Self::Named(value.to_string())
    }
}

/// A keyframes definition: step selector to declarations, in author order.
///
/// Steps are stored under their textual key, the same shape a JSON object
/// has, so numeric steps read as `"25"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframes(IndexMap<String, Declarations>);

impl Keyframes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a step.
    pub fn step(mut self, selector: impl Into<KeyframeSelector>, declarations: Declarations) -> Self {
        self.0.insert(selector.into().key(), declarations);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders a step key: numeric keys become percentages, others are kept verbatim.
pub fn keyframe_selector(key: &str) -> String {
    match key.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => format!("{}%", format_number(n)),
        _ => key.to_string(),
    }
}

/// Builds the `@keyframes` rule for `name`.
///
/// # Examples
///
/// ```
/// use coulis_core::{keyframes_rule, CssValue, Declarations, Keyframes};
///
/// let mut visible = Declarations::new();
/// visible.insert("opacity".to_string(), Some(CssValue::from(1)));
///
/// let frames = Keyframes::new().step("to", visible);
/// assert_eq!(keyframes_rule("c1", &frames), "@keyframes c1{to{opacity:1;}}");
/// ```
pub fn keyframes_rule(name: &str, keyframes: &Keyframes) -> String {
    let steps: String = keyframes
        .0
        .iter()
        .map(|(key, declarations)| {
            format!(
                "{}{{{}}}",
                keyframe_selector(key),
                to_declaration_block(declarations)
            )
        })
        .collect();
    format!("@keyframes {name}{{{steps}}}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::CssValue;

    fn opacity(value: f64) -> Declarations {
        let mut declarations = Declarations::new();
        declarations.insert("opacity".to_string(), Some(CssValue::Number(value)));
        declarations
    }

    #[test]
    fn test_selector_normalization() {
        assert_eq!(keyframe_selector("25"), "25%");
        assert_eq!(keyframe_selector("12.5"), "12.5%");
        assert_eq!(keyframe_selector("from"), "from");
        assert_eq!(keyframe_selector("to"), "to");
        assert_eq!(keyframe_selector("50%"), "50%");
    }

    #[test]
    fn test_rule_keeps_author_order() {
        let frames = Keyframes::new()
            .step(25, opacity(0.5))
            .step("from", opacity(0.0))
            .step("to", opacity(1.0));

        assert_eq!(
            keyframes_rule("cabc", &frames),
            "@keyframes cabc{25%{opacity:0.5;}from{opacity:0;}to{opacity:1;}}"
        );
    }

    #[test]
    fn test_step_with_lengths() {
        let mut declarations = Declarations::new();
        declarations.insert("marginLeft".to_string(), Some(CssValue::from(20)));
        declarations.insert("color".to_string(), None);
        let frames = Keyframes::new().step(100, declarations);

        assert_eq!(
            keyframes_rule("k", &frames),
            "@keyframes k{100%{margin-left:20px;}}"
        );
    }

    #[test]
    fn test_from_json_numeric_keys() {
        let frames: Keyframes = serde_json::from_value(serde_json::json!({
            "0": { "opacity": 0 },
            "100": { "opacity": 1 }
        }))
        .unwrap();

        assert_eq!(
            keyframes_rule("k", &frames),
            "@keyframes k{0%{opacity:0;}100%{opacity:1;}}"
        );
    }
}
