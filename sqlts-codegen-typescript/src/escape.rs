//! Escaping for text embedded in TypeScript string literals.
//!
//! Both routines make a single pass over the input, so a backslash added by
//! one escape is never itself escaped again.

/// Quote `s` as a single-quoted TypeScript string literal.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Escape `s` for use between the backticks of a template literal.
///
/// Line breaks are kept as-is, which is what lets multi-line SQL read
/// naturally in the generated code.
pub fn template_literal_body(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_literal() {
        assert_eq!(string_literal("id"), "'id'");
        assert_eq!(string_literal(""), "''");
    }

    #[test]
    fn test_string_literal_escapes_every_occurrence() {
        assert_eq!(string_literal("it's a 'test'"), r"'it\'s a \'test\''");
    }

    #[test]
    fn test_backslash_escaped_before_quote() {
        // A backslash followed by a quote must become `\\` + `\'`, not `\\'`.
        assert_eq!(string_literal(r"a\'b"), r"'a\\\'b'");
        assert_eq!(string_literal(r"\\"), r"'\\\\'");
    }

    #[test]
    fn test_string_literal_line_breaks() {
        assert_eq!(string_literal("a\nb"), r"'a\nb'");
    }

    #[test]
    fn test_template_literal_body() {
        assert_eq!(
            template_literal_body("SELECT '`x`' AS \"a\\b\""),
            "SELECT '\\`x\\`' AS \"a\\\\b\""
        );
    }

    #[test]
    fn test_template_literal_placeholders() {
        assert_eq!(template_literal_body("SELECT '${x}'"), "SELECT '\\${x}'");
        assert_eq!(template_literal_body("WHERE id = $1"), "WHERE id = $1");
        assert_eq!(template_literal_body("$$body$$"), "$$body$$");
    }

    #[test]
    fn test_template_literal_keeps_newlines() {
        assert_eq!(template_literal_body("SELECT 1\nFROM t"), "SELECT 1\nFROM t");
    }
}
