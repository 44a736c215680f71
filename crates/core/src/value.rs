//! Value types accepted by the style engine.
//!
//! Inputs arrive either from Rust code (through the `From` conversions) or
//! from JSON documents. A JSON `null` deserializes to `None`, which the
//! engine treats as "no value": the declaration is skipped.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A raw CSS value: a bare number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Number(f64),
    Text(String),
}

impl CssValue {
    /// Returns the number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns true for values that cannot produce a declaration (NaN, empty text).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(n) => n.is_nan(),
            Self::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CssValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CssValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CssValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CssValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Formats a number the way it reads in a style sheet: integral values have
/// no fractional part (`10`, not `10.0`).
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// The value of one property in a style input.
///
/// `Scalar` produces one unconditional rule. `Conditional` maps state names
/// to values; the `base` key is the unconditional variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Scalar(CssValue),
    Conditional(IndexMap<String, Option<CssValue>>),
}

impl From<CssValue> for StyleValue {
    fn from(value: CssValue) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        Self::Scalar(value.into())
    }
}

/// A style input: property name to optional value, in author order.
pub type StyleObject = IndexMap<String, Option<StyleValue>>;

/// A flat property map used by global style blocks and keyframe steps.
pub type Declarations = IndexMap<String, Option<CssValue>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.25), "1.25");
    }

    #[test]
    fn test_css_value_display() {
        assert_eq!(CssValue::from(12).to_string(), "12");
        assert_eq!(CssValue::from("red").to_string(), "red");
    }

    #[test]
    fn test_is_blank() {
        assert!(CssValue::Number(f64::NAN).is_blank());
        assert!(CssValue::from("  ").is_blank());
        assert!(!CssValue::from(0).is_blank());
    }

    #[test]
    fn test_style_object_from_json() {
        let input: StyleObject = serde_json::from_value(serde_json::json!({
            "color": "red",
            "width": 10,
            "padding": null,
            "backgroundColor": { "base": "green", "hover": null }
        }))
        .unwrap();

        let keys: Vec<&str> = input.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["color", "width", "padding", "backgroundColor"]);
        assert_eq!(input["color"], Some(StyleValue::from("red")));
        assert_eq!(input["width"], Some(StyleValue::from(10)));
        assert_eq!(input["padding"], None);

        let Some(StyleValue::Conditional(states)) = &input["backgroundColor"] else {
            panic!("expected a conditional value");
        };
        assert_eq!(states["base"], Some(CssValue::from("green")));
        assert_eq!(states["hover"], None);
    }
}
