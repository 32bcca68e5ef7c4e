//! TypeScript interface builder.

use sqlts_codegen::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn to_line(&self) -> CodeFragment {
        let optional = if self.optional { "?" } else { "" };
        CodeFragment::Line(format!("{}{}: {};", self.name, optional, self.ty))
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    name: String,
    fields: Vec<InterfaceField>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            exported: true,
        }
    }

    /// Add a required field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InterfaceField::new(name, ty));
        self
    }

    /// Add a field with full configuration.
    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[InterfaceField] {
        &self.fields
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };

        if self.fields.is_empty() {
            vec![CodeFragment::Line(format!(
                "{}interface {} {{}}",
                export, self.name
            ))]
        } else {
            vec![CodeFragment::block(
                format!("{}interface {} {{", export, self.name),
                self.fields.iter().map(InterfaceField::to_line).collect(),
                "}",
            )]
        }
    }
}
