//! Pretty output formatting.

use coulis_core::TokenTree;
use coulis_ssr::StyleMetadata;
use indexmap::IndexMap;

use crate::run::{HashReport, Resolution};

/// Format a resolved document for display.
pub fn format_resolution(resolution: &Resolution) -> String {
    let mut output = format!("STYLES ({})\n", resolution.class_names.len());
    output.push_str(&"-".repeat(40));
    for (i, class_names) in resolution.class_names.iter().enumerate() {
        output.push_str(&format!("\n[{i}] {}", display_class_names(class_names)));
    }

    for (g, group) in resolution.grouped_class_names.iter().enumerate() {
        output.push_str(&format!("\n\nGROUP {g} ({})\n", group.len()));
        output.push_str(&"-".repeat(40));
        for (i, class_names) in group.iter().enumerate() {
            output.push_str(&format!("\n[{i}] {}", display_class_names(class_names)));
        }
    }

    if !resolution.keyframes.is_empty() {
        output.push_str(&format!("\n\nKEYFRAMES ({})\n", resolution.keyframes.len()));
        output.push_str(&"-".repeat(40));
        for (name, generated) in &resolution.keyframes {
            output.push_str(&format!("\n{name}: {generated}"));
        }
    }

    let mut references = Vec::new();
    collect_references(&resolution.custom_properties, "", &mut references);
    if !references.is_empty() {
        output.push_str(&format!("\n\nCUSTOM PROPERTIES ({})\n", references.len()));
        output.push_str(&"-".repeat(40));
        for (path, reference) in references {
            output.push_str(&format!("\n{path}: {reference}"));
        }
    }

    output
}

/// Format extracted metadata as markup, one `<style>` element per line.
pub fn format_metadata(metadata: &[StyleMetadata]) -> String {
    metadata
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a hash report for display.
pub fn format_hash(report: &HashReport) -> String {
    format!(
        "{}\n  Key: {}\n  Hash: {:#010x}",
        report.class_name, report.key, report.hash
    )
}

fn display_class_names(class_names: &str) -> &str {
    if class_names.is_empty() {
        "(none)"
    } else {
        class_names
    }
}

fn collect_references(tree: &IndexMap<String, TokenTree>, prefix: &str, out: &mut Vec<(String, String)>) {
    for (key, node) in tree {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match node {
            TokenTree::Leaf(value) => out.push((path, value.to_string())),
            TokenTree::Branch(children) => collect_references(children, &path, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coulis::Scope;

    #[test]
    fn test_format_resolution() {
        let mut resolution = Resolution {
            class_names: vec!["c1 c2".to_string(), String::new()],
            grouped_class_names: vec![vec!["c3".to_string()]],
            ..Resolution::default()
        };
        resolution.keyframes.insert("fade".to_string(), "c4".to_string());
        resolution.custom_properties = serde_json::from_value(serde_json::json!({
            "space": { "1": "var(--space-1)" }
        }))
        .unwrap();

        let output = format_resolution(&resolution);

        assert!(output.starts_with("STYLES (2)\n"));
        assert!(output.contains("\n[0] c1 c2"));
        assert!(output.contains("\n[1] (none)"));
        assert!(output.contains("GROUP 0 (1)"));
        assert!(output.contains("\nfade: c4"));
        assert!(output.contains("\nspace.1: var(--space-1)"));
    }

    #[test]
    fn test_format_resolution_omits_empty_sections() {
        let output = format_resolution(&Resolution::default());
        assert!(!output.contains("KEYFRAMES"));
        assert!(!output.contains("CUSTOM PROPERTIES"));
    }

    #[test]
    fn test_format_metadata_one_per_line() {
        let metadata = vec![
            StyleMetadata::new(Scope::Global, [], "a{}"),
            StyleMetadata::new(Scope::Shorthand, [], ""),
        ];
        let output = format_metadata(&metadata);
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_format_hash() {
        let output = format_hash(&HashReport::new("a"));
        assert_eq!(output, "ce40c292c\n  Key: a\n  Hash: 0xe40c292c");
    }
}
