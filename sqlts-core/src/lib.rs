//! Core utilities and types for sqlts.
//!
//! This crate provides the plugin options model, the error taxonomy shared
//! by every stage of generation, and string utilities for identifiers.

mod error;
mod options;
mod utils;

// Errors
pub use error::{Error, ErrorKind, Result};
// Plugin options
pub use options::{BetterSqlite3Options, DriverKind, Mysql2Options, PluginOptions};
// String utilities
pub use utils::{lower_first, sanitize_identifier, to_lower_camel_case, to_pascal_case};
