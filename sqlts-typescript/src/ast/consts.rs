//! TypeScript const declaration builder.

use sqlts_codegen::{CodeFragment, Renderable};

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    name: String,
    value: String,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    /// A const bound to a raw expression.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ty: None,
            exported: true,
        }
    }

    /// A const bound to a template literal holding `text` verbatim.
    pub fn template(name: impl Into<String>, text: &str) -> Self {
        Self::new(name, format!("`{}`", escape_template(text)))
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        // Continuation lines of a multi-line value are emitted as-is; inside
        // a template literal any added indentation would change the string.
        let mut lines: Vec<String> = self.value.split('\n').map(str::to_string).collect();
        if let Some(first) = lines.first_mut() {
            *first = format!("{}const {}{} = {}", export, self.name, type_annotation, first);
        }
        if let Some(last) = lines.last_mut() {
            last.push(';');
        }
        lines.into_iter().map(CodeFragment::Line).collect()
    }
}

/// Escape text for embedding inside a backtick template literal.
pub(crate) fn escape_template(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build;

    #[test]
    fn test_simple_const() {
        let c = build(&Const::new("foo", "42"));
        assert_eq!(c, "export const foo = 42;\n");
    }

    #[test]
    fn test_const_with_type() {
        let c = build(&Const::new("limit", "10").ty("number").private());
        assert_eq!(c, "const limit: number = 10;\n");
    }

    #[test]
    fn test_multiline_template_const() {
        let c = build(&Const::template(
            "getAuthorQuery",
            "-- name: GetAuthor :one\nSELECT id FROM authors\n  WHERE id = $1",
        ));
        assert_eq!(
            c,
            "export const getAuthorQuery = `-- name: GetAuthor :one\nSELECT id FROM authors\n  WHERE id = $1`;\n"
        );
    }

    #[test]
    fn test_template_escapes_backticks_and_interpolation() {
        assert_eq!(escape_template("a `b`"), "a \\`b\\`");
        assert_eq!(escape_template("${x} $1"), "\\${x} $1");
        assert_eq!(escape_template("c:\\path"), "c:\\\\path");
    }

    #[test]
    fn test_template_keeps_blank_lines() {
        let c = build(&Const::template("q", "SELECT 1\n\nFROM t"));
        assert_eq!(c, "export const q = `SELECT 1\n\nFROM t`;\n");
    }
}
