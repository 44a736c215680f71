//! Style resolution: turns a style input into space-separated class names.

use std::sync::Arc;

use coulis_core::{
    base_rule, to_declaration, CssValue, PropertyMapping, Result, Scope, StateTemplate,
    StyleContract, StyleObject, StyleValue, BASE_STATE, SELECTOR_PLACEHOLDER,
};

use crate::context::StyleContext;

/// A styling function bound to a contract and a context.
///
/// Cloning is cheap; clones share the contract and the context.
#[derive(Debug, Clone)]
pub struct Styles {
    context: StyleContext,
    contract: Arc<StyleContract>,
    group: Option<String>,
}

impl Styles {
    pub(crate) fn new(context: StyleContext, contract: Arc<StyleContract>, group: Option<String>) -> Self {
        Self {
            context,
            contract,
            group,
        }
    }

    pub fn contract(&self) -> &StyleContract {
        &self.contract
    }

    /// The grouping rule prelude (`@media ...`), if any.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Resolves an input to class names, committing any rule not yet cached.
    ///
    /// An unknown property or state aborts the call. Rules committed for
    /// earlier properties stay committed.
    pub fn resolve(&self, input: &StyleObject) -> Result<String> {
        let mut class_names = Vec::new();

        for (key, value) in input {
            for property in self.contract.expand(key) {
                let mapping = self.contract.mapping(property)?;

                match value {
                    None => {}
                    Some(StyleValue::Scalar(value)) => {
                        class_names.extend(self.commit_value(property, mapping, None, value));
                    }
                    Some(StyleValue::Conditional(states)) => {
                        for (state, value) in states {
                            let template = if state == BASE_STATE {
                                None
                            } else {
                                Some((state.as_str(), self.contract.state(property, state)?))
                            };
                            let Some(value) = value else {
                                continue;
                            };
                            class_names.extend(self.commit_value(property, mapping, template, value));
                        }
                    }
                }
            }
        }

        Ok(class_names.join(" "))
    }

    fn commit_value(
        &self,
        property: &str,
        mapping: &PropertyMapping,
        state: Option<(&str, &StateTemplate)>,
        input: &CssValue,
    ) -> Option<String> {
        let Some(mapped) = mapping.apply(input) else {
            tracing::debug!(property, value = %input, "No mapped value, skipping");
            return None;
        };

        let value = self.context.translate(property, mapped);
        if value.is_blank() {
            return None;
        }

        let declaration = to_declaration(property, &value);
        // Non-base states are keyed by their rendered template, so the same
        // state name under two contracts never shares a class name.
        let condition = state
            .map(|(_, template)| template.render(SELECTOR_PLACEHOLDER, ""))
            .unwrap_or_default();
        let key = format!("{}{condition}{declaration}", self.group().unwrap_or_default());

        let render = |selector: &str| {
            let rule = match state {
                Some((_, template)) => template.render(selector, &declaration),
                None => base_rule(selector, &declaration),
            };
            match &self.group {
                Some(prelude) => format!("{prelude}{{{rule}}}"),
                None => rule,
            }
        };

        let scope = Scope::for_rule(property, &render("&"));
        Some(self.context.commit(scope, &key, |class_name| {
            vec![render(&format!(".{class_name}"))]
        }))
    }
}
