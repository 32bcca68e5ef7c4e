//! CodeFile abstraction for structured TypeScript file generation.

use sqlts_codegen::{CodeBuilder, CodeFragment, Renderable};

/// Header line of every generated file.
pub const BANNER: &str = "// Code generated by sqlc. DO NOT EDIT.";

/// A structured representation of a TypeScript file.
///
/// An optional banner comment followed by body elements, each separated
/// by exactly one blank line.
///
/// # Example
///
/// ```
/// use sqlts_typescript::{BANNER, CodeFile, ast::Const};
///
/// let file = CodeFile::new()
///     .banner(BANNER)
///     .add(Const::new("answer", "42"))
///     .render();
/// assert_eq!(file, "// Code generated by sqlc. DO NOT EDIT.\n\nexport const answer = 42;\n");
/// ```
#[derive(Debug, Default)]
pub struct CodeFile {
    banner: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading comment line.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript();

        if let Some(banner) = &self.banner {
            builder.push_line(banner);
            if !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        builder.build()
    }
}
