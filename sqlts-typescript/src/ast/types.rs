//! TypeScript type alias builder.

use sqlts_codegen::{CodeFragment, Renderable};

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAlias {
    name: String,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        vec![CodeFragment::Line(format!(
            "{}type {} = {};",
            export, self.name, self.ty
        ))]
    }
}
