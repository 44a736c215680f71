use coulis_core::{minify, Scope};

use super::StyleSheet;

/// In-memory rule buffer for rendering without a document.
///
/// There is no prior state to hydrate from, so
/// [`hydrated_class_names`](StyleSheet::hydrated_class_names) is always empty.
#[derive(Debug, Clone)]
pub struct VirtualSheet {
    scope: Scope,
    rules: Vec<String>,
}

impl VirtualSheet {
    pub fn new(scope: Scope) -> Self {
        Self {
            scope,
            rules: Vec::new(),
        }
    }

    /// The buffered rules, in insertion order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }
}

impl StyleSheet for VirtualSheet {
    fn scope(&self) -> Scope {
        self.scope
    }

    fn insert(&mut self, rule: &str) {
        self.rules.push(rule.to_string());
    }

    fn content(&self) -> String {
        minify(&self.rules.join("\n"))
    }

    fn hydrated_class_names(&self) -> Vec<String> {
        Vec::new()
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn flush(&mut self) {
        self.rules.clear();
    }

    fn remove(&mut self) {
        self.rules.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut sheet = VirtualSheet::new(Scope::Longhand);
        sheet.insert(".c1{color:red;}");
        sheet.insert(".c2{color:blue;}");

        assert_eq!(sheet.rule_count(), 2);
        assert_eq!(sheet.content(), ".c1{color:red;}.c2{color:blue;}");
        assert_eq!(sheet.rules()[0], ".c1{color:red;}");
    }

    #[test]
    fn test_content_is_minified() {
        let mut sheet = VirtualSheet::new(Scope::Global);
        sheet.insert("body  {\n  margin:0px;\n}");
        assert_eq!(sheet.content(), "body{ margin:0px;}");
    }

    #[test]
    fn test_never_hydrated() {
        let sheet = VirtualSheet::new(Scope::Global);
        assert!(sheet.hydrated_class_names().is_empty());
    }

    #[test]
    fn test_flush_and_remove_clear_buffer() {
        let mut sheet = VirtualSheet::new(Scope::Shorthand);
        sheet.insert(".c1{margin:0px;}");
        sheet.flush();
        assert_eq!(sheet.content(), "");

        sheet.insert(".c1{margin:0px;}");
        sheet.remove();
        assert_eq!(sheet.rule_count(), 0);
        assert_eq!(sheet.scope(), Scope::Shorthand);
    }
}
