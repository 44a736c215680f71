/// Minifies CSS text: strips newlines, collapses whitespace runs to a single
/// space, and drops whitespace right before an opening brace.
///
/// # Examples
///
/// ```
/// use coulis_core::minify;
///
/// assert_eq!(minify("body  {\n  margin: 0;\n}"), "body{ margin: 0;}");
/// ```
pub fn minify(css: &str) -> String {
    let mut output = String::with_capacity(css.len());
    let mut pending_space = false;

    for c in css.chars() {
        match c {
            '\n' | '\r' => {}
            c if c.is_whitespace() => pending_space = true,
            '{' => {
                pending_space = false;
                output.push('{');
            }
            c => {
                if pending_space && !output.is_empty() {
                    output.push(' ');
                }
                pending_space = false;
                output.push(c);
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_minified() {
        assert_eq!(minify(".c1{color:red;}"), ".c1{color:red;}");
    }

    #[test]
    fn test_strips_newlines() {
        assert_eq!(minify(".a{}\n.b{}"), ".a{}.b{}");
    }

    #[test]
    fn test_collapses_runs() {
        assert_eq!(
            minify("@media (min-width:  640px)  {.c1{color:red;}}"),
            "@media (min-width: 640px){.c1{color:red;}}"
        );
    }

    #[test]
    fn test_trims_leading_and_trailing() {
        assert_eq!(minify("  .a{}  "), ".a{}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(minify(""), "");
    }
}
