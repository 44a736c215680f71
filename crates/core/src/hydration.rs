//! The hydration contract between server-rendered markup and a client.
//!
//! Every emitted `<style>` element names its scope in [`TYPE_ATTRIBUTE`] and
//! lists the class names resident in it, comma-separated, in
//! [`CACHE_ATTRIBUTE`].

/// Attribute naming the scope of a `<style>` element.
pub const TYPE_ATTRIBUTE: &str = "data-coulis-type";

/// Attribute listing the class names already present in a `<style>` element.
pub const CACHE_ATTRIBUTE: &str = "data-coulis-cache";

/// Parses a comma-separated class-name list, ignoring blanks.
///
/// # Examples
///
/// ```
/// use coulis_core::parse_class_list;
///
/// assert_eq!(parse_class_list("c1, c2,,c3 "), vec!["c1", "c2", "c3"]);
/// assert!(parse_class_list("").is_empty());
/// ```
pub fn parse_class_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins class names into the attribute form.
pub fn join_class_list<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_class_list() {
        assert_eq!(join_class_list(["c1", "c2"]), "c1,c2");
        assert_eq!(join_class_list(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_parse_join_inverse() {
        let names = vec!["ca1", "cb2", "cc3"];
        assert_eq!(parse_class_list(&join_class_list(names.clone())), names);
    }
}
