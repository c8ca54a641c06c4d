//! Shared naming helpers.

use std::path::Path;

/// Convert a string to camelCase (e.g., "get_user" -> "getUser", "add-user" -> "addUser")
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;

    for c in s.chars() {
        if c == '_' || c == '-' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else if result.is_empty() {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// File name without directories and without its last extension.
///
/// `"queries/get_user.ts"` -> `"get_user"`, `"a/b.c.ts"` -> `"b.c"`.
pub fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("get_user"), "getUser");
        assert_eq!(to_camel_case("add-user-email"), "addUserEmail");
        assert_eq!(to_camel_case("already"), "already");
        assert_eq!(to_camel_case("listUsers"), "listUsers");
        assert_eq!(to_camel_case("GetUser"), "getUser");
        assert_eq!(to_camel_case("_private"), "private");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("a/get_user.ts"), "get_user");
        assert_eq!(file_stem("get_user"), "get_user");
        assert_eq!(file_stem("/abs/dir/b.c.ts"), "b.c");
        assert_eq!(file_stem(""), "");
    }
}
