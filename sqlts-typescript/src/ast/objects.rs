//! TypeScript/JavaScript object literal builder.

use sqlts_codegen::CodeFragment;

use super::arrays::JsArray;

/// A property in a JavaScript object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// An array literal.
    Array(JsArray),
}

impl Property {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        }
    }

    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    pub fn array(key: impl Into<String>, value: JsArray) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Array(value),
        }
    }

    fn to_line(&self) -> CodeFragment {
        let value = match &self.value {
            PropertyValue::String(s) => format!("\"{}\"", s),
            PropertyValue::Raw(s) => s.clone(),
            PropertyValue::Array(arr) => arr.build(),
        };
        CodeFragment::Line(format!("{}: {},", self.key, value))
    }
}

/// Builder for JavaScript/TypeScript object literals.
///
/// Objects always render one property per line with a trailing comma.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::string(key, value));
        self
    }

    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    pub fn array(mut self, key: impl Into<String>, value: JsArray) -> Self {
        self.properties.push(Property::array(key, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// One `key: value,` line per property.
    pub fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties.iter().map(Property::to_line).collect()
    }

    /// Render the object inside surrounding code: `{open}{` ... `}{close}`.
    pub fn wrap(&self, open: impl Into<String>, close: impl Into<String>) -> CodeFragment {
        let open = open.into();
        let close = close.into();
        if self.is_empty() {
            CodeFragment::Line(format!("{}{{}}{}", open, close))
        } else {
            CodeFragment::block(
                format!("{}{{", open),
                self.properties_to_fragments(),
                format!("}}{}", close),
            )
        }
    }
}
