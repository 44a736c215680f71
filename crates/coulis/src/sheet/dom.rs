use wasm_bindgen::JsCast;
use web_sys::{CssStyleSheet, HtmlStyleElement};

use coulis_core::{parse_class_list, Scope, CACHE_ATTRIBUTE, TYPE_ATTRIBUTE};

use super::StyleSheet;
use crate::config::InsertionMode;

/// A live `<style>` element, one per scope.
///
/// Elements rendered by the server are reused, so their
/// [`CACHE_ATTRIBUTE`] lists the class names the client must not insert again.
pub struct DomSheet {
    scope: Scope,
    element: HtmlStyleElement,
    mode: InsertionMode,
}

impl DomSheet {
    /// Finds the scope's `<style>` element or appends a new one to `<head>`.
    ///
    /// Returns `None` when there is no document or the element cannot be created.
    pub fn locate_or_create(scope: Scope, mode: InsertionMode) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let selector = format!("style[{TYPE_ATTRIBUTE}=\"{}\"]", scope.as_str());

        let element = match document.query_selector(&selector).ok().flatten() {
            Some(existing) => existing,
            None => {
                let created = document.create_element("style").ok()?;
                created.set_attribute(TYPE_ATTRIBUTE, scope.as_str()).ok()?;
                document.head()?.append_child(&created).ok()?;
                created
            }
        };

        let element = element.dyn_into::<HtmlStyleElement>().ok()?;
        Some(Self {
            scope,
            element,
            mode,
        })
    }

    fn css_sheet(&self) -> Option<CssStyleSheet> {
        self.element.sheet()?.dyn_into::<CssStyleSheet>().ok()
    }

    fn append_text(&self, rule: &str) {
        if let Err(error) = self.element.append_with_str_1(rule) {
            tracing::warn!(scope = %self.scope, ?error, "Failed to append rule text");
        }
    }
}

impl StyleSheet for DomSheet {
    fn scope(&self) -> Scope {
        self.scope
    }

    fn insert(&mut self, rule: &str) {
        match (self.mode, self.css_sheet()) {
            (InsertionMode::Speedy, Some(sheet)) => {
                let index = sheet.css_rules().map(|rules| rules.length()).unwrap_or(0);
                if let Err(error) = sheet.insert_rule_with_index(rule, index) {
                    tracing::warn!(scope = %self.scope, rule, ?error, "Style sheet rejected rule");
                }
            }
            _ => self.append_text(rule),
        }
    }

    fn content(&self) -> String {
        match (self.mode, self.css_sheet()) {
            (InsertionMode::Speedy, Some(sheet)) => {
                let Ok(rules) = sheet.css_rules() else {
                    return String::new();
                };
                (0..rules.length())
                    .filter_map(|i| rules.get(i))
                    .map(|rule| rule.css_text())
                    .collect()
            }
            _ => self.element.text_content().unwrap_or_default(),
        }
    }

    fn hydrated_class_names(&self) -> Vec<String> {
        self.element
            .get_attribute(CACHE_ATTRIBUTE)
            .map(|value| parse_class_list(&value))
            .unwrap_or_default()
    }

    fn rule_count(&self) -> usize {
        self.css_sheet()
            .and_then(|sheet| sheet.css_rules().ok())
            .map(|rules| rules.length() as usize)
            .unwrap_or(0)
    }

    fn flush(&mut self) {
        if let Some(sheet) = self.css_sheet() {
            let count = sheet.css_rules().map(|rules| rules.length()).unwrap_or(0);
            for index in (0..count).rev() {
                let _ = sheet.delete_rule(index);
            }
        }
        self.element.set_text_content(None);
        let _ = self.element.remove_attribute(CACHE_ATTRIBUTE);
    }

    fn remove(&mut self) {
        self.flush();
        self.element.remove();
    }
}
