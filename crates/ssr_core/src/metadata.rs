//! Style metadata: one `<style>` element's attributes and CSS text.

use std::fmt;

use coulis_core::{join_class_list, Scope, CACHE_ATTRIBUTE, TYPE_ATTRIBUTE};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SsrCoreError};

/// The markup for one scope, ready to be written into a document head.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMetadata {
    pub attributes: IndexMap<String, String>,
    pub content: String,
}

impl StyleMetadata {
    /// Builds the metadata for a scope from its resident class names and
    /// CSS text.
    pub fn new<'a>(
        scope: Scope,
        class_names: impl IntoIterator<Item = &'a str>,
        content: impl Into<String>,
    ) -> Self {
        let mut attributes = IndexMap::new();
        attributes.insert(TYPE_ATTRIBUTE.to_string(), scope.as_str().to_string());
        attributes.insert(CACHE_ATTRIBUTE.to_string(), join_class_list(class_names));

        Self {
            attributes,
            content: content.into(),
        }
    }

    /// The scope named by the type attribute, if present and known.
    pub fn scope(&self) -> Option<Scope> {
        self.attributes.get(TYPE_ATTRIBUTE)?.parse().ok()
    }
}

impl fmt::Display for StyleMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<style")?;
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape_attribute(value))?;
        }
        write!(f, ">{}</style>", escape_style_content(&self.content))
    }
}

/// Concatenates the `<style>` tags in order.
pub fn metadata_to_string(metadata: &[StyleMetadata]) -> String {
    metadata.iter().map(ToString::to_string).collect()
}

/// Serializes metadata to a JSON array.
pub fn metadata_to_json(metadata: &[StyleMetadata]) -> Result<String> {
    serde_json::to_string(metadata).map_err(|e| SsrCoreError::Serialization(e.to_string()))
}

/// Escapes a value for a double-quoted HTML attribute.
pub fn escape_attribute(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            c => output.push(c),
        }
    }
    output
}

/// Keeps CSS text from closing its `<style>` element early.
///
/// `</` becomes `<\/`, which CSS reads the same way inside strings.
pub fn escape_style_content(content: &str) -> String {
    content.replace("</", "<\\/")
}
