//! Query, column and parameter definitions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Command kind attached to a query with the `-- name: Foo :cmd` annotation.
///
/// The command fixes the shape of the generated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Execute a statement, return nothing.
    #[serde(rename = ":exec")]
    Exec,
    /// Execute a statement, return the generated identifier of the inserted row.
    #[serde(rename = ":execlastid")]
    ExecLastId,
    /// Return exactly one row, or null.
    #[serde(rename = ":one")]
    One,
    /// Return every row.
    #[serde(rename = ":many")]
    Many,
}

impl Command {
    /// Get the command tag as written in query annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Exec => ":exec",
            Command::ExecLastId => ":execlastid",
            Command::One => ":one",
            Command::Many => ":many",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a command tag is not one of the supported kinds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command '{0}'")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ":exec" => Ok(Command::Exec),
            ":execlastid" => Ok(Command::ExecLastId),
            ":one" => Ok(Command::One),
            ":many" => Ok(Command::Many),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// A result-set field, or the column underlying a bound parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    /// Declared name, if the query exposes one.
    pub name: Option<String>,
    /// Source SQL type name, possibly schema-qualified (e.g. `pg_catalog.int4`).
    #[serde(rename = "type")]
    pub ty: Option<String>,
    pub not_null: bool,
    pub is_array: bool,
    pub array_dims: u32,
}

impl Column {
    /// Create a nullable column with the given name and type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Mark the column as `NOT NULL`.
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Mark the column as an array with the given number of dimensions.
    pub fn array(mut self, dims: u32) -> Self {
        self.is_array = true;
        self.array_dims = dims;
        self
    }
}

/// A positional bind parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameter {
    /// 1-based placeholder ordinal.
    pub number: u32,
    pub column: Option<Column>,
}

impl Parameter {
    pub fn new(number: u32, column: Column) -> Self {
        Self {
            number,
            column: Some(column),
        }
    }
}

/// A named SQL query as analyzed by sqlc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub name: String,
    pub cmd: Command,
    pub text: String,
    pub filename: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Query {
    pub fn new(
        name: impl Into<String>,
        cmd: Command,
        text: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cmd,
            text: text.into(),
            filename: filename.into(),
            params: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Append a parameter; its ordinal follows the existing ones.
    pub fn param(mut self, column: Column) -> Self {
        let number = self.params.len() as u32 + 1;
        self.params.push(Parameter::new(number, column));
        self
    }

    /// Append a result column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Iterate over every column this query references, parameters first.
    pub fn all_columns(&self) -> impl Iterator<Item = &Column> {
        self.params
            .iter()
            .filter_map(|p| p.column.as_ref())
            .chain(self.columns.iter())
    }
}
