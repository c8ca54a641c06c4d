//! TypeScript-specific naming conventions.

use sqlts_core::to_camel_case;

const RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Strict mode reserved words
    "await",
    "implements",
    "interface",
    "package",
    "private",
    "protected",
    "public",
    "static",
];

/// Returns true if `name` cannot be used as a function name as-is.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Function name for a query file stem (e.g., "get_user" -> "getUser").
///
/// Names that are reserved or start with a digit get a leading underscore.
pub fn function_name(stem: &str) -> String {
    let name = to_camel_case(stem);
    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    if starts_with_digit || is_reserved(&name) {
        format!("_{}", name)
    } else {
        name
    }
}
