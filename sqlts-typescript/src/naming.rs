//! TypeScript-specific naming conventions.

use sqlts_codegen::NamingConvention;
use sqlts_core::{lower_first, sanitize_identifier, to_lower_camel_case, to_pascal_case};

fn escape_ts_reserved(name: &str) -> String {
    format!("_{}", name)
}

fn query_function(name: &str) -> String {
    sanitize_identifier(&lower_first(name))
}

fn query_type(name: &str) -> String {
    sanitize_identifier(&to_pascal_case(name))
}

fn column_field(name: &str) -> String {
    sanitize_identifier(&to_lower_camel_case(name))
}

fn source_file(name: &str) -> String {
    name.replacen('.', "_", 1)
}

/// TypeScript naming conventions.
pub const TS_NAMING: NamingConvention = NamingConvention {
    // Functions keep the query name with a lowercased first letter
    query_to_function: query_function,
    // Interfaces use PascalCase
    query_to_type: query_type,
    // Fields use camelCase
    column_to_field: column_field,
    // "query.sql" -> "query_sql"
    source_to_file: source_file,
    reserved_words: &[
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
        // TypeScript reserved words
        "any",
        "as",
        "async",
        "await",
        "boolean",
        "constructor",
        "declare",
        "get",
        "implements",
        "interface",
        "module",
        "namespace",
        "never",
        "number",
        "object",
        "package",
        "private",
        "protected",
        "public",
        "readonly",
        "require",
        "set",
        "static",
        "string",
        "symbol",
        "type",
        "undefined",
        "unknown",
    ],
    escape_reserved: escape_ts_reserved,
};
