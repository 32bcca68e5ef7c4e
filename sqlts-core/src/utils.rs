//! Shared utility functions for identifier generation.

/// Convert a string to PascalCase (e.g., "get_author" -> "GetAuthor")
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Lowercase the first character only (e.g., "GetAuthor" -> "getAuthor")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a column name to lowerCamelCase (e.g., "author_id" -> "authorId")
///
/// The first character is lowercased and every `_` followed by a lowercase
/// ASCII letter is dropped, uppercasing that letter. `_` before a digit or an
/// uppercase letter is kept.
pub fn to_lower_camel_case(s: &str) -> String {
    let lowered = lower_first(s);
    let mut result = String::with_capacity(lowered.len());
    let mut chars = lowered.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Make a string usable as a JavaScript identifier.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`, and a leading digit is
/// prefixed with `_`. An empty input yields `_`.
pub fn sanitize_identifier(s: &str) -> String {
    let mut result: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("GetAuthor"), "GetAuthor");
        assert_eq!(to_pascal_case("get_author"), "GetAuthor");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("GetAuthor"), "getAuthor");
        assert_eq!(lower_first("ID"), "iD");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_to_lower_camel_case() {
        assert_eq!(to_lower_camel_case("author_id"), "authorId");
        assert_eq!(to_lower_camel_case("Bio"), "bio");
        assert_eq!(to_lower_camel_case("created_at"), "createdAt");
        assert_eq!(to_lower_camel_case("AuthorID"), "authorID");
        assert_eq!(to_lower_camel_case("name"), "name");
    }

    #[test]
    fn test_to_lower_camel_case_underscores() {
        assert_eq!(to_lower_camel_case("address_2"), "address_2");
        assert_eq!(to_lower_camel_case("line_2_text"), "line_2Text");
        assert_eq!(to_lower_camel_case("_private"), "Private");
        assert_eq!(to_lower_camel_case("trailing_"), "trailing_");
        assert_eq!(to_lower_camel_case("a__b"), "a_B");
        assert_eq!(to_lower_camel_case("a_B"), "a_B");
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("count"), "count");
        assert_eq!(sanitize_identifier("count(*)"), "count___");
        assert_eq!(sanitize_identifier("1st"), "_1st");
        assert_eq!(sanitize_identifier("$ref"), "$ref");
        assert_eq!(sanitize_identifier(""), "_");
    }
}
