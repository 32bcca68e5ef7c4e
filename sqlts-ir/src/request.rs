//! Request and response envelope.

use serde::{Deserialize, Serialize};

use crate::Query;

/// Input to one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateRequest {
    pub queries: Vec<Query>,
    /// Raw plugin options; UTF-8 JSON when non-empty.
    pub plugin_options: Vec<u8>,
}

impl GenerateRequest {
    pub fn new(queries: Vec<Query>, plugin_options: impl Into<Vec<u8>>) -> Self {
        Self {
            queries,
            plugin_options: plugin_options.into(),
        }
    }
}

/// A single generated source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Path relative to the sqlc output directory.
    pub name: String,
    pub contents: Vec<u8>,
}

impl GeneratedFile {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Contents as text. Generated files are always UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.contents)
    }
}

/// Output of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub files: Vec<GeneratedFile>,
}
