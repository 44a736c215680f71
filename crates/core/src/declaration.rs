//! Pure declaration formatting.
//!
//! Converts `(property, value)` pairs into `kebab-property:value;` text.

use crate::value::{CssValue, Declarations};

/// Properties whose bare numbers are rendered without a unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animation-iteration-count",
    "aspect-ratio",
    "border-image-outset",
    "border-image-slice",
    "border-image-width",
    "box-flex",
    "box-flex-group",
    "box-ordinal-group",
    "column-count",
    "columns",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-negative",
    "flex-order",
    "flex-positive",
    "flex-shrink",
    "flood-opacity",
    "font-weight",
    "grid-area",
    "grid-column",
    "grid-column-end",
    "grid-column-span",
    "grid-column-start",
    "grid-row",
    "grid-row-end",
    "grid-row-span",
    "grid-row-start",
    "line-clamp",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "scale",
    "stop-opacity",
    "stroke-dasharray",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "tab-size",
    "widows",
    "z-index",
    "zoom",
];

/// Converts a camelCase property name to kebab-case.
///
/// Custom properties (`--name`) are returned unchanged.
///
/// # Examples
///
/// ```
/// use coulis_core::to_kebab_case;
///
/// assert_eq!(to_kebab_case("backgroundColor"), "background-color");
/// assert_eq!(to_kebab_case("WebkitTransition"), "-webkit-transition");
/// assert_eq!(to_kebab_case("--brandColor"), "--brandColor");
/// ```
pub fn to_kebab_case(name: &str) -> String {
    if is_custom_property(name) {
        return name.to_string();
    }

    let mut output = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            output.push('-');
            output.push(c.to_ascii_lowercase());
        } else {
            output.push(c);
        }
    }
    output
}

/// Returns true for custom property names (`--name`).
pub fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Returns true when bare numbers for this (kebab-case) property take no unit.
pub fn is_unitless(property: &str) -> bool {
    is_custom_property(property) || UNITLESS_PROPERTIES.contains(&property)
}

/// Renders one declaration.
///
/// Numbers get a `px` suffix unless the property is unitless. Callers
/// filter out absent values before calling this.
///
/// # Examples
///
/// ```
/// use coulis_core::{to_declaration, CssValue};
///
/// assert_eq!(to_declaration("opacity", &CssValue::Number(0.5)), "opacity:0.5;");
/// assert_eq!(to_declaration("width", &CssValue::Number(10.0)), "width:10px;");
/// assert_eq!(to_declaration("backgroundColor", &"red".into()), "background-color:red;");
/// ```
pub fn to_declaration(name: &str, value: &CssValue) -> String {
    let property = to_kebab_case(name);
    match value {
        CssValue::Number(_) if !is_unitless(&property) => format!("{property}:{value}px;"),
        _ => format!("{property}:{value};"),
    }
}

/// Concatenates the declarations of a flat property map, skipping absent values.
pub fn to_declaration_block(properties: &Declarations) -> String {
    properties
        .iter()
        .filter_map(|(name, value)| value.as_ref().map(|value| to_declaration(name, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_plain() {
        assert_eq!(to_kebab_case("color"), "color");
        assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_kebab_case_already_kebab() {
        assert_eq!(to_kebab_case("z-index"), "z-index");
    }

    #[test]
    fn test_unitless_number() {
        assert_eq!(to_declaration("opacity", &CssValue::Number(0.5)), "opacity:0.5;");
        assert_eq!(to_declaration("zIndex", &CssValue::from(3)), "z-index:3;");
        assert_eq!(to_declaration("lineHeight", &CssValue::from(1.5)), "line-height:1.5;");
    }

    #[test]
    fn test_pixel_default() {
        assert_eq!(to_declaration("width", &CssValue::from(10)), "width:10px;");
        assert_eq!(to_declaration("marginTop", &CssValue::from(-4)), "margin-top:-4px;");
    }

    #[test]
    fn test_text_value_untouched() {
        assert_eq!(to_declaration("width", &CssValue::from("50%")), "width:50%;");
    }

    #[test]
    fn test_custom_property_number() {
        assert_eq!(to_declaration("--gap", &CssValue::from(4)), "--gap:4;");
    }

    #[test]
    fn test_declaration_block_skips_absent() {
        let mut properties = Declarations::new();
        properties.insert("margin".to_string(), Some(CssValue::from(0)));
        properties.insert("color".to_string(), None);
        properties.insert("fontWeight".to_string(), Some(CssValue::from(700)));

        assert_eq!(to_declaration_block(&properties), "margin:0px;font-weight:700;");
    }

    #[test]
    fn test_declaration_block_empty() {
        assert_eq!(to_declaration_block(&Declarations::new()), "");
    }
}
