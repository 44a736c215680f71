//! Command execution, independent of how results are printed.

use coulis::StyleContext;
use coulis_core::{fnv1a32, to_class_name, TokenTree};
use coulis_ssr::{ServerContext, StyleMetadata};
use indexmap::IndexMap;
use serde::Serialize;

use crate::document::StyleDocument;
use crate::error::Result;

/// Everything a document produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Keyframes name to generated animation name.
    pub keyframes: IndexMap<String, String>,
    /// Custom properties mirrored as `var(--name)` references.
    pub custom_properties: IndexMap<String, TokenTree>,
    /// Class names per entry of `styles`.
    pub class_names: Vec<String>,
    /// Class names per group, per entry of the group's `styles`.
    pub grouped_class_names: Vec<Vec<String>>,
}

/// A cache key and the class name derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashReport {
    pub key: String,
    pub hash: u32,
    pub class_name: String,
}

impl HashReport {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            hash: fnv1a32(&key),
            class_name: to_class_name(&key),
            key,
        }
    }
}

/// Runs a document through `context`: global styles, keyframes and custom
/// properties first, then every style input.
pub fn resolve(document: &StyleDocument, context: &StyleContext) -> Result<Resolution> {
    let contract = document.contract.build()?;
    let mut resolution = Resolution::default();

    if let Some(global_styles) = &document.global_styles {
        context.set_global_styles(global_styles)?;
    }

    for (name, keyframes) in &document.keyframes {
        let generated = context.create_keyframes(keyframes)?;
        resolution.keyframes.insert(name.clone(), generated);
    }

    if let Some(tokens) = &document.custom_properties {
        resolution.custom_properties = context.create_custom_properties(tokens)?;
    }

    let styles = context.create_styles(contract.clone());
    for input in &document.styles {
        resolution.class_names.push(styles.resolve(input)?);
    }

    for group in &document.groups {
        let styles = context.create_grouped_styles(&group.at_rule, &group.condition, contract.clone());
        let class_names = group
            .styles
            .iter()
            .map(|input| styles.resolve(input))
            .collect::<coulis_core::Result<Vec<_>>>()?;
        resolution.grouped_class_names.push(class_names);
    }

    tracing::debug!(
        inputs = resolution.class_names.len(),
        groups = resolution.grouped_class_names.len(),
        "Resolved document"
    );

    Ok(resolution)
}

/// Resolves a document on the server context and extracts its markup.
pub fn extract(document: &StyleDocument, server: &ServerContext) -> Result<Vec<StyleMetadata>> {
    resolve(document, server.context())?;
    Ok(server.extract())
}

#[cfg(test)]
mod tests {
    use super::*;
    use coulis::Scope;
    use coulis_core::CoulisError;

    use crate::error::CliError;

    fn document() -> StyleDocument {
        StyleDocument::parse(
            r#"{
                "contract": {
                    "properties": { "color": true, "padding": true, "width": true, "height": true },
                    "shorthands": { "size": ["width", "height"] },
                    "states": { "hover": "&:hover{decl}" }
                },
                "globalStyles": { "body": { "margin": 0 } },
                "keyframes": { "fade": { "from": { "opacity": 0 }, "to": { "opacity": 1 } } },
                "customProperties": { "space": { "1": "4px" } },
                "styles": [
                    { "color": { "base": "black", "hover": "red" } },
                    { "size": 10 }
                ],
                "groups": [
                    { "atRule": "@media", "condition": "(min-width: 640px)", "styles": [{ "padding": 8 }] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_document() {
        let context = StyleContext::in_memory();
        let resolution = resolve(&document(), &context).unwrap();

        assert_eq!(resolution.class_names.len(), 2);
        assert_eq!(resolution.class_names[0].split(' ').count(), 2);
        assert_eq!(
            resolution.class_names[1],
            format!("{} {}", to_class_name("width:10px;"), to_class_name("height:10px;"))
        );
        assert_eq!(
            resolution.grouped_class_names,
            vec![vec![to_class_name("@media (min-width: 640px)padding:8px;")]]
        );
        assert!(resolution.keyframes["fade"].starts_with('c'));
        assert_eq!(
            resolution.custom_properties["space"].get("1"),
            Some(&TokenTree::from("var(--space-1)"))
        );

        let global = context.with_registry(|r| r.sheet(Scope::Global).rule_count());
        assert_eq!(global, 3);
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let first = resolve(&document(), &StyleContext::in_memory()).unwrap();
        let second = resolve(&document(), &StyleContext::in_memory()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_unknown_property() {
        let mut document = document();
        document.styles = vec![serde_json::from_value(serde_json::json!({ "margin": 1 })).unwrap()];

        let result = resolve(&document, &StyleContext::in_memory());
        assert!(matches!(
            result,
            Err(CliError::Style(CoulisError::UnknownProperty(p))) if p == "margin"
        ));
    }

    #[test]
    fn test_extract_document() {
        let server = ServerContext::isolated();
        let metadata = extract(&document(), &server).unwrap();

        assert_eq!(metadata.len(), 5);
        assert!(metadata[Scope::Global.index()].content.contains("@keyframes"));
        assert!(metadata[Scope::ConditionalShorthand.index()]
            .content
            .contains("padding:8px;"));

        // Per-render scopes were flushed.
        assert_eq!(server.context().with_registry(|r| r.sheet(Scope::Longhand).rule_count()), 0);
    }

    #[test]
    fn test_hash_report() {
        let report = HashReport::new("a");
        assert_eq!(report.hash, 0xe40c292c);
        assert_eq!(report.class_name, "ce40c292c");
    }
}
