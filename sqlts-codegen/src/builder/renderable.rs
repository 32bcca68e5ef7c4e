//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Declarations describe themselves as fragments; only [`CodeBuilder`]
//! knows about indentation and line endings.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, indented body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a block fragment closed by `close`.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }
}

impl From<&str> for CodeFragment {
    fn from(s: &str) -> Self {
        Self::Line(s.to_string())
    }
}

impl From<String> for CodeFragment {
    fn from(s: String) -> Self {
        Self::Line(s)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_conversions() {
        assert_eq!(
            CodeFragment::from("x;"),
            CodeFragment::Line("x;".to_string())
        );
        assert_eq!(
            CodeFragment::from(String::from("y;")),
            CodeFragment::line("y;")
        );
    }

    #[test]
    fn test_block_fragment() {
        let block = CodeFragment::block(
            "if (rows.length !== 1) {",
            vec![CodeFragment::line("return null;")],
            "}",
        );
        match block {
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                assert_eq!(header, "if (rows.length !== 1) {");
                assert_eq!(body.len(), 1);
                assert_eq!(close.as_deref(), Some("}"));
            }
            _ => panic!("Expected Block variant"),
        }
    }
}
