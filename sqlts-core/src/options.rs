//! Plugin options passed by sqlc as JSON.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result};

/// Supported client libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverKind {
    /// node-postgres
    Pg,
    /// postgres.js
    Postgres,
    Mysql2,
    BetterSqlite3,
    /// `@libsql/client`
    Turso,
}

impl DriverKind {
    pub const ALL: [DriverKind; 5] = [
        DriverKind::Pg,
        DriverKind::Postgres,
        DriverKind::Mysql2,
        DriverKind::BetterSqlite3,
        DriverKind::Turso,
    ];

    /// Get the selector as written in plugin options.
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverKind::Pg => "pg",
            DriverKind::Postgres => "postgres",
            DriverKind::Mysql2 => "mysql2",
            DriverKind::BetterSqlite3 => "better-sqlite3",
            DriverKind::Turso => "turso",
        }
    }
}

impl fmt::Display for DriverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverKind {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        DriverKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Box::new(Error::UnknownDriver { name: s.to_string() }))
    }
}

/// Options forwarded to the mysql2 driver.
///
/// These mirror the connection flags of the same name: when the generated
/// code's connection enables them, large integers arrive as strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mysql2Options {
    pub support_big_numbers: bool,
    pub big_number_strings: bool,
}

/// Options forwarded to the better-sqlite3 driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BetterSqlite3Options {
    /// Read integer columns as `bigint` through `stmt.safeIntegers(true)`.
    pub safe_integers: bool,
}

/// Plugin options as configured in `sqlc.yaml`.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOptions {
    pub driver: Option<String>,
    /// Target runtime (e.g. `node`, `bun`). Currently informational.
    pub runtime: Option<String>,
    pub mysql2: Mysql2Options,
    #[serde(rename = "better-sqlite3")]
    pub better_sqlite3: BetterSqlite3Options,
}

impl PluginOptions {
    /// Parse raw plugin options. Empty input yields the defaults.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let text =
            std::str::from_utf8(bytes).map_err(|source| Box::new(Error::OptionsEncoding { source }))?;
        serde_json::from_str(text).map_err(|source| Error::options_parse(source, text))
    }

    /// Resolve the configured driver selector.
    pub fn driver_kind(&self) -> Result<DriverKind> {
        match self.driver.as_deref() {
            None | Some("") => Err(Box::new(Error::MissingDriver)),
            Some(name) => name.parse(),
        }
    }
}
