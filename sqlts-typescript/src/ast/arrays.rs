//! TypeScript/JavaScript array literal builder.

/// An element in a JavaScript array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
}

impl ArrayElement {
    fn render(&self) -> String {
        match self {
            Self::String(s) => format!("\"{}\"", s),
            Self::Raw(s) => s.clone(),
        }
    }
}

/// Builder for JavaScript/TypeScript array literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsArray {
    elements: Vec<ArrayElement>,
}

impl JsArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an array from raw expressions.
    pub fn from_raw<I, S>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: iter
                .into_iter()
                .map(|s| ArrayElement::Raw(s.into()))
                .collect(),
        }
    }

    /// Add a string element (will be quoted).
    pub fn string(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::String(value.into()));
        self
    }

    /// Add a raw expression element (will not be quoted).
    pub fn raw(mut self, value: impl Into<String>) -> Self {
        self.elements.push(ArrayElement::Raw(value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Render the elements as a comma separated list, without brackets.
    pub fn elements(&self) -> String {
        self.elements
            .iter()
            .map(ArrayElement::render)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render as an inline `[a, b]` literal.
    pub fn build(&self) -> String {
        format!("[{}]", self.elements())
    }
}
