//! Reads server-rendered `<style>` elements back out of markup.
//!
//! Only elements carrying the type attribute are returned; any other
//! `<style>` in the document is skipped.

use coulis_core::{parse_class_list, Scope, CACHE_ATTRIBUTE, TYPE_ATTRIBUTE};
use indexmap::IndexMap;

use crate::error::{Result, SsrCoreError, MAX_MARKUP_SIZE};

const OPEN_TAG: &str = "<style";
const CLOSE_TAG: &str = "</style>";

/// A server-rendered scope found in markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HydratedStyle {
    pub scope: Scope,
    pub class_names: Vec<String>,
    pub content: String,
}

/// Parses every engine-owned `<style>` element in `html`, in document order.
pub fn parse_style_elements(html: &str) -> Result<Vec<HydratedStyle>> {
    if html.len() > MAX_MARKUP_SIZE {
        return Err(SsrCoreError::PayloadTooLarge {
            size: html.len(),
            max: MAX_MARKUP_SIZE,
        });
    }

    let mut styles = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = html[cursor..].find(OPEN_TAG) {
        let start = cursor + offset;
        let after_name = start + OPEN_TAG.len();

        // `<styles>` or `<style-x>` are other elements.
        let boundary = html[after_name..].chars().next();
        if !matches!(boundary, Some(c) if c == '>' || c == '/' || c.is_whitespace()) {
            cursor = after_name;
            continue;
        }

        let tag_end = html[after_name..]
            .find('>')
            .map(|i| after_name + i)
            .ok_or(SsrCoreError::UnterminatedStyle(start))?;
        let body_start = tag_end + 1;
        let body_end = html[body_start..]
            .find(CLOSE_TAG)
            .map(|i| body_start + i)
            .ok_or(SsrCoreError::UnterminatedStyle(start))?;

        let attributes = parse_attributes(&html[after_name..tag_end]);
        if let Some(kind) = attributes.get(TYPE_ATTRIBUTE) {
            let scope = kind
                .parse::<Scope>()
                .map_err(|_| SsrCoreError::UnknownScope(kind.clone()))?;
            let class_names = attributes
                .get(CACHE_ATTRIBUTE)
                .map(String::as_str)
                .map(parse_class_list)
                .unwrap_or_default();

            styles.push(HydratedStyle {
                scope,
                class_names,
                content: unescape_style_content(&html[body_start..body_end]),
            });
        }

        cursor = body_end + CLOSE_TAG.len();
    }

    Ok(styles)
}

/// Parses `name="value"`, `name='value'`, `name=value` and bare `name`
/// attributes. Values are entity-decoded.
fn parse_attributes(source: &str) -> IndexMap<String, String> {
    let mut attributes = IndexMap::new();
    let mut rest = source.trim_end_matches('/').trim_start();

    while !rest.is_empty() {
        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(rest.len());
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after) => {
                let after = after.trim_start();
                let (value, remaining) = match after.chars().next() {
                    Some(quote @ ('"' | '\'')) => {
                        let inner = &after[1..];
                        match inner.find(quote) {
                            Some(end) => (&inner[..end], &inner[end + 1..]),
                            None => (inner, ""),
                        }
                    }
                    _ => {
                        let end = after.find(char::is_whitespace).unwrap_or(after.len());
                        (&after[..end], &after[end..])
                    }
                };
                rest = remaining.trim_start();
                decode_entities(value)
            }
            None => String::new(),
        };

        if !name.is_empty() {
            attributes.insert(name, value);
        }
    }

    attributes
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Reverses [`crate::escape_style_content`].
///
/// A `<\/` the CSS already contained also comes back as `</`. Both spell the
/// same code points in CSS, and escaping again yields the same markup.
fn unescape_style_content(content: &str) -> String {
    content.replace("<\\/", "</")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_engine_styles() {
        let html = concat!(
            "<html><head>",
            "<style data-coulis-type=\"global\" data-coulis-cache=\"c1\">body{margin:0px;}</style>",
            "<style>.other{}</style>",
            "<style data-coulis-type=\"longhand\" data-coulis-cache=\"c2,c3\">.c2{color:red;}.c3{width:1px;}</style>",
            "</head></html>"
        );

        let styles = parse_style_elements(html).unwrap();

        assert_eq!(styles.len(), 2);
        assert_eq!(styles[0].scope, Scope::Global);
        assert_eq!(styles[0].class_names, vec!["c1"]);
        assert_eq!(styles[0].content, "body{margin:0px;}");
        assert_eq!(styles[1].scope, Scope::Longhand);
        assert_eq!(styles[1].class_names, vec!["c2", "c3"]);
    }

    #[test]
    fn test_attribute_forms() {
        let attributes = parse_attributes(" media=print data-coulis-type='shorthand' nonce  DATA-X=\"a&amp;b\"");
        assert_eq!(attributes["media"], "print");
        assert_eq!(attributes["data-coulis-type"], "shorthand");
        assert_eq!(attributes["nonce"], "");
        assert_eq!(attributes["data-x"], "a&b");
    }

    #[test]
    fn test_missing_cache_attribute() {
        let styles =
            parse_style_elements("<style data-coulis-type=\"shorthand\"></style>").unwrap();
        assert_eq!(styles[0].class_names, Vec::<String>::new());
    }

    #[test]
    fn test_unknown_scope() {
        let result = parse_style_elements("<style data-coulis-type=\"sideways\"></style>");
        assert_eq!(result, Err(SsrCoreError::UnknownScope("sideways".to_string())));
    }

    #[test]
    fn test_unterminated() {
        let result = parse_style_elements("<p></p><style data-coulis-type=\"global\">a{}");
        assert_eq!(result, Err(SsrCoreError::UnterminatedStyle(7)));
    }

    #[test]
    fn test_similar_tag_names_ignored() {
        let styles = parse_style_elements("<styles></styles><style-x></style-x>").unwrap();
        assert!(styles.is_empty());
    }

    #[test]
    fn test_escaped_content_restored() {
        let styles = parse_style_elements(
            "<style data-coulis-type=\"longhand\">.c1:after{content:\"<\\/b>\";}</style>",
        )
        .unwrap();
        assert_eq!(styles[0].content, ".c1:after{content:\"</b>\";}");
    }

    #[test]
    fn test_payload_too_large() {
        let html = " ".repeat(MAX_MARKUP_SIZE + 1);
        assert!(matches!(
            parse_style_elements(&html),
            Err(SsrCoreError::PayloadTooLarge { .. })
        ));
    }
}
