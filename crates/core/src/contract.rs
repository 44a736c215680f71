//! Style contracts: which properties a styling function accepts, how input
//! values map to CSS values, which shorthands expand, and which states exist.
//!
//! Contracts are validated once by [`StyleContractBuilder::build`] and are
//! immutable afterwards.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{CoulisError, Result};
use crate::value::CssValue;

/// Name of the privileged unconditional state.
pub const BASE_STATE: &str = "base";

/// Placeholder for the class selector in string state templates.
pub const SELECTOR_PLACEHOLDER: &str = "&";

/// Placeholder for the declaration block in string state templates.
pub const DECLARATION_PLACEHOLDER: &str = "{decl}";

static PASS_THROUGH: PropertyMapping = PropertyMapping::PassThrough;

type TransformFn = Arc<dyn Fn(&CssValue) -> Option<CssValue> + Send + Sync>;
type TemplateFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// How an input value for one property becomes a CSS value.
#[derive(Clone)]
pub enum PropertyMapping {
    /// Any value passes through.
    PassThrough,
    /// Only listed values pass through.
    Allowed(Vec<CssValue>),
    /// The input's string form is looked up in a table.
    Lookup(IndexMap<String, CssValue>),
    /// The input is transformed by a function.
    Transform(TransformFn),
}

impl PropertyMapping {
    /// Builds a transform mapping from a closure.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(&CssValue) -> Option<CssValue> + Send + Sync + 'static,
    {
        Self::Transform(Arc::new(f))
    }

    /// Maps an input value. `None` means the declaration is skipped.
    pub fn apply(&self, input: &CssValue) -> Option<CssValue> {
        match self {
            Self::PassThrough => Some(input.clone()),
            Self::Allowed(values) => values.contains(input).then(|| input.clone()),
            Self::Lookup(table) => table.get(&input.to_string()).cloned(),
            Self::Transform(f) => f(input),
        }
    }
}

impl fmt::Debug for PropertyMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PassThrough => f.write_str("PassThrough"),
            Self::Allowed(values) => f.debug_tuple("Allowed").field(values).finish(),
            Self::Lookup(table) => f.debug_tuple("Lookup").field(table).finish(),
            Self::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

/// Builds the rule text for a named state.
#[derive(Clone)]
pub enum StateTemplate {
    /// `&` is replaced by the selector, `{decl}` by `{declaration}`.
    Pattern(String),
    /// Called with `(selector, declaration)`.
    Function(TemplateFn),
}

impl StateTemplate {
    /// Builds a function template from a closure.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Renders the rule for `selector` (e.g. `.c1a2b`) and `declaration`.
    ///
    /// # Examples
    ///
    /// ```
    /// use coulis_core::StateTemplate;
    ///
    /// let hover = StateTemplate::from("&:hover{decl}");
    /// assert_eq!(hover.render(".c1", "color:red;"), ".c1:hover{color:red;}");
    ///
    /// let wide = StateTemplate::from("@media (min-width:640px){&{decl}}");
    /// assert_eq!(
    ///     wide.render(".c1", "color:red;"),
    ///     "@media (min-width:640px){.c1{color:red;}}"
    /// );
    /// ```
    pub fn render(&self, selector: &str, declaration: &str) -> String {
        match self {
            Self::Pattern(pattern) => pattern
                .split(DECLARATION_PLACEHOLDER)
                .map(|part| part.replace(SELECTOR_PLACEHOLDER, selector))
                .collect::<Vec<_>>()
                .join(&format!("{{{declaration}}}")),
            Self::Function(f) => f(selector, declaration),
        }
    }
}

impl From<&str> for StateTemplate {
    fn from(pattern: &str) -> Self {
        Self::Pattern(pattern.to_string())
    }
}

impl fmt::Debug for StateTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.debug_tuple("Pattern").field(pattern).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

/// The unconditional rule template: `.{class}{declaration}`.
pub fn base_rule(selector: &str, declaration: &str) -> String {
    format!("{selector}{{{declaration}}}")
}

/// A validated style contract.
#[derive(Debug, Clone, Default)]
pub struct StyleContract {
    properties: IndexMap<String, PropertyMapping>,
    shorthands: IndexMap<String, Vec<String>>,
    states: IndexMap<String, StateTemplate>,
    loose: bool,
}

impl StyleContract {
    /// Starts a new contract.
    pub fn builder() -> StyleContractBuilder {
        StyleContractBuilder::default()
    }

    /// A contract accepting every property as pass-through, with no states.
    pub fn loose() -> Self {
        Self {
            loose: true,
            ..Self::default()
        }
    }

    /// Returns the mapping for a property.
    ///
    /// Loose contracts answer `PassThrough` for unlisted properties.
    pub fn mapping(&self, property: &str) -> Result<&PropertyMapping> {
        match self.properties.get(property) {
            Some(mapping) => Ok(mapping),
            None if self.loose => Ok(&PASS_THROUGH),
            None => Err(CoulisError::UnknownProperty(property.to_string())),
        }
    }

    /// Returns the properties a key resolves to: the shorthand's expansion,
    /// or the key itself.
    pub fn expand<'a>(&'a self, key: &'a str) -> Vec<&'a str> {
        match self.shorthands.get(key) {
            Some(targets) => targets.iter().map(String::as_str).collect(),
            None => vec![key],
        }
    }

    /// Returns the template for a non-base state.
    pub fn state(&self, property: &str, state: &str) -> Result<&StateTemplate> {
        self.states
            .get(state)
            .ok_or_else(|| CoulisError::UnknownState {
                property: property.to_string(),
                state: state.to_string(),
            })
    }

    /// Returns true when unlisted properties pass through.
    pub fn is_loose(&self) -> bool {
        self.loose
    }
}

/// Builder for [`StyleContract`].
#[derive(Debug, Default)]
pub struct StyleContractBuilder {
    properties: IndexMap<String, PropertyMapping>,
    shorthands: IndexMap<String, Vec<String>>,
    states: IndexMap<String, StateTemplate>,
    loose: bool,
}

impl StyleContractBuilder {
    /// Adds a property with its mapping.
    pub fn property(mut self, name: impl Into<String>, mapping: PropertyMapping) -> Self {
        self.properties.insert(name.into(), mapping);
        self
    }

    /// Adds a shorthand that expands to the given properties.
    pub fn shorthand<I, S>(mut self, name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets = targets.into_iter().map(Into::into).collect();
        self.shorthands.insert(name.into(), targets);
        self
    }

    /// Adds a named state.
    pub fn state(mut self, name: impl Into<String>, template: impl Into<StateTemplate>) -> Self {
        self.states.insert(name.into(), template.into());
        self
    }

    /// Accepts unlisted properties as pass-through.
    pub fn loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }

    /// Validates and builds the contract.
    pub fn build(self) -> Result<StyleContract> {
        for (name, targets) in &self.shorthands {
            if targets.is_empty() {
                return Err(CoulisError::InvalidConfig(format!(
                    "shorthand \"{name}\" expands to no properties"
                )));
            }
            if !self.loose {
                if let Some(missing) = targets.iter().find(|t| !self.properties.contains_key(*t)) {
                    return Err(CoulisError::InvalidConfig(format!(
                        "shorthand \"{name}\" targets unknown property \"{missing}\""
                    )));
                }
            }
        }

        for name in self.states.keys() {
            if name == BASE_STATE {
                return Err(CoulisError::InvalidConfig(format!(
                    "state \"{BASE_STATE}\" is reserved"
                )));
            }
            if name.trim().is_empty() {
                return Err(CoulisError::InvalidConfig(
                    "state names cannot be empty".to_string(),
                ));
            }
        }

        Ok(StyleContract {
            properties: self.properties,
            shorthands: self.shorthands,
            states: self.states,
            loose: self.loose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> StyleContract {
        StyleContract::builder()
            .property("width", PropertyMapping::PassThrough)
            .property("height", PropertyMapping::PassThrough)
            .shorthand("size", ["width", "height"])
            .state("hover", "&:hover{decl}")
            .build()
            .unwrap()
    }

    #[test]
    fn test_pass_through() {
        let value = CssValue::from("red");
        assert_eq!(PropertyMapping::PassThrough.apply(&value), Some(value));
    }

    #[test]
    fn test_allowed_values() {
        let mapping = PropertyMapping::Allowed(vec!["block".into(), "none".into()]);
        assert_eq!(mapping.apply(&"none".into()), Some("none".into()));
        assert_eq!(mapping.apply(&"grid".into()), None);
    }

    #[test]
    fn test_lookup_by_string_form() {
        let mut table = IndexMap::new();
        table.insert("1".to_string(), CssValue::from("0.25rem"));
        table.insert("primary".to_string(), CssValue::from("#0055ff"));
        let mapping = PropertyMapping::Lookup(table);

        assert_eq!(mapping.apply(&CssValue::from(1)), Some("0.25rem".into()));
        assert_eq!(mapping.apply(&"primary".into()), Some("#0055ff".into()));
        assert_eq!(mapping.apply(&"secondary".into()), None);
    }

    #[test]
    fn test_transform() {
        let mapping = PropertyMapping::transform(|value| {
            value.as_number().map(|n| CssValue::Text(format!("{}rem", n / 4.0)))
        });
        assert_eq!(mapping.apply(&CssValue::from(2)), Some("0.5rem".into()));
        assert_eq!(mapping.apply(&"auto".into()), None);
    }

    #[test]
    fn test_expand_shorthand() {
        let contract = contract();
        assert_eq!(contract.expand("size"), vec!["width", "height"]);
        assert_eq!(contract.expand("width"), vec!["width"]);
    }

    #[test]
    fn test_unknown_property() {
        let contract = contract();
        let result = contract.mapping("color");
        assert!(matches!(result, Err(CoulisError::UnknownProperty(p)) if p == "color"));
    }

    #[test]
    fn test_loose_contract_passes_unknown() {
        let contract = StyleContract::loose();
        assert!(contract.is_loose());
        assert!(matches!(
            contract.mapping("color"),
            Ok(PropertyMapping::PassThrough)
        ));
    }

    #[test]
    fn test_unknown_state() {
        let contract = contract();
        let result = contract.state("width", "focus");
        assert!(matches!(result, Err(CoulisError::UnknownState { .. })));
    }

    #[test]
    fn test_reject_base_state() {
        let result = StyleContract::builder().state("base", "&{decl}").build();
        assert!(matches!(result, Err(CoulisError::InvalidConfig(_))));
    }

    #[test]
    fn test_reject_unknown_shorthand_target() {
        let result = StyleContract::builder()
            .property("width", PropertyMapping::PassThrough)
            .shorthand("size", ["width", "height"])
            .build();
        assert!(matches!(result, Err(CoulisError::InvalidConfig(msg)) if msg.contains("height")));
    }

    #[test]
    fn test_loose_allows_unlisted_shorthand_target() {
        let result = StyleContract::builder()
            .shorthand("paddingX", ["paddingLeft", "paddingRight"])
            .loose(true)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_reject_empty_shorthand() {
        let result = StyleContract::builder()
            .shorthand("nothing", Vec::<String>::new())
            .build();
        assert!(matches!(result, Err(CoulisError::InvalidConfig(_))));
    }

    #[test]
    fn test_function_template() {
        let template = StateTemplate::function(|sel, decl| format!("{sel}[data-open]{{{decl}}}"));
        assert_eq!(
            template.render(".c9", "opacity:1;"),
            ".c9[data-open]{opacity:1;}"
        );
    }

    #[test]
    fn test_pattern_keeps_ampersand_in_declaration() {
        // `&` inside the declaration must not be treated as the selector.
        let template = StateTemplate::from("&:hover{decl}");
        assert_eq!(
            template.render(".c1", "content:\"&\";"),
            ".c1:hover{content:\"&\";}"
        );
    }

    #[test]
    fn test_base_rule() {
        assert_eq!(base_rule(".c1", "color:red;"), ".c1{color:red;}");
    }
}
