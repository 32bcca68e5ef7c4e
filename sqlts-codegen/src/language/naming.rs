//! Naming conventions for generated code.

/// Language-specific naming conventions.
///
/// Defines how query names, column names and source file names are turned
/// into identifiers, and how reserved words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a query name to a function name (e.g. "GetAuthor" -> "getAuthor")
    pub query_to_function: fn(&str) -> String,
    /// Transform a query name to a type name prefix (e.g. "get_author" -> "GetAuthor")
    pub query_to_type: fn(&str) -> String,
    /// Transform a column name to a field name (e.g. "author_id" -> "authorId")
    pub column_to_field: fn(&str) -> String,
    /// Transform a query file name to an output stem (e.g. "query.sql" -> "query_sql")
    pub source_to_file: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g. "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a function name.
    pub fn function_name(&self, query_name: &str) -> String {
        let transformed = (self.query_to_function)(query_name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a type name prefix.
    pub fn type_name(&self, query_name: &str) -> String {
        let transformed = (self.query_to_type)(query_name);
        self.safe_name(&transformed)
    }

    /// Transform a column name into a property name.
    ///
    /// Property names are never escaped: reserved words are valid keys.
    pub fn field_name(&self, column_name: &str) -> String {
        (self.column_to_field)(column_name)
    }

    /// Transform a source file name into an output file stem.
    pub fn file_name(&self, source: &str) -> String {
        (self.source_to_file)(source)
    }
}
