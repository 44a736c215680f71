//! Style sheet scopes and rule routing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::declaration::to_kebab_case;

/// Native CSS shorthands. Rules for these go to the shorthand scopes so the
/// longhands that follow them in the cascade can override a single side.
const SHORTHAND_PROPERTIES: &[&str] = &[
    "animation",
    "background",
    "border",
    "border-block",
    "border-block-end",
    "border-block-start",
    "border-bottom",
    "border-color",
    "border-image",
    "border-inline",
    "border-inline-end",
    "border-inline-start",
    "border-left",
    "border-radius",
    "border-right",
    "border-style",
    "border-top",
    "border-width",
    "column-rule",
    "columns",
    "container",
    "flex",
    "flex-flow",
    "font",
    "gap",
    "grid",
    "grid-area",
    "grid-column",
    "grid-row",
    "grid-template",
    "inset",
    "inset-block",
    "inset-inline",
    "list-style",
    "margin",
    "margin-block",
    "margin-inline",
    "mask",
    "offset",
    "outline",
    "overflow",
    "padding",
    "padding-block",
    "padding-inline",
    "place-content",
    "place-items",
    "place-self",
    "scroll-margin",
    "scroll-padding",
    "text-decoration",
    "text-emphasis",
    "transition",
];

/// Returns true when the property (camelCase or kebab-case) is a native CSS shorthand.
pub fn is_shorthand_property(name: &str) -> bool {
    SHORTHAND_PROPERTIES.contains(&to_kebab_case(name).as_str())
}

/// An insertion bucket. The declaration order is the cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    Global,
    Shorthand,
    Longhand,
    ConditionalShorthand,
    ConditionalLonghand,
}

impl Scope {
    /// All scopes in precedence order.
    pub const ALL: [Scope; 5] = [
        Scope::Global,
        Scope::Shorthand,
        Scope::Longhand,
        Scope::ConditionalShorthand,
        Scope::ConditionalLonghand,
    ];

    /// Identifier written to the `data-coulis-type` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Shorthand => "shorthand",
            Self::Longhand => "longhand",
            Self::ConditionalShorthand => "conditionalShorthand",
            Self::ConditionalLonghand => "conditionalLonghand",
        }
    }

    /// Position of this scope in [`Scope::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Routes an atomic rule: shorthand or longhand family, upgraded to the
    /// conditional counterpart when the rule text opens with an at-rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use coulis_core::Scope;
    ///
    /// assert_eq!(Scope::for_rule("margin", ".c1{margin:0px;}"), Scope::Shorthand);
    /// assert_eq!(Scope::for_rule("color", ".c1{color:red;}"), Scope::Longhand);
    /// assert_eq!(
    ///     Scope::for_rule("color", "@media (min-width:640px){.c1{color:red;}}"),
    ///     Scope::ConditionalLonghand
    /// );
    /// ```
    pub fn for_rule(property: &str, rule: &str) -> Self {
        let conditional = rule.trim_start().starts_with('@');
        match (is_shorthand_property(property), conditional) {
            (true, false) => Self::Shorthand,
            (false, false) => Self::Longhand,
            (true, true) => Self::ConditionalShorthand,
            (false, true) => Self::ConditionalLonghand,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| format!("Unknown scope: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(Scope::Global < Scope::Shorthand);
        assert!(Scope::Shorthand < Scope::Longhand);
        assert!(Scope::Longhand < Scope::ConditionalShorthand);
        assert!(Scope::ConditionalShorthand < Scope::ConditionalLonghand);

        for (i, scope) in Scope::ALL.iter().enumerate() {
            assert_eq!(scope.index(), i);
        }
    }

    #[test]
    fn test_shorthand_detection() {
        assert!(is_shorthand_property("padding"));
        assert!(is_shorthand_property("borderRadius"));
        assert!(is_shorthand_property("border-top"));
        assert!(!is_shorthand_property("paddingTop"));
        assert!(!is_shorthand_property("color"));
    }

    #[test]
    fn test_conditional_shorthand_routing() {
        assert_eq!(
            Scope::for_rule("padding", "@supports (display:grid){.c1{padding:4px;}}"),
            Scope::ConditionalShorthand
        );
    }

    #[test]
    fn test_pseudo_class_stays_unconditional() {
        assert_eq!(
            Scope::for_rule("color", ".c1:hover{color:red;}"),
            Scope::Longhand
        );
    }

    #[test]
    fn test_parse_round_trip_identifiers() {
        assert_eq!("global".parse::<Scope>(), Ok(Scope::Global));
        assert_eq!(
            "conditionalLonghand".parse::<Scope>(),
            Ok(Scope::ConditionalLonghand)
        );
        assert!("bogus".parse::<Scope>().is_err());
    }
}
