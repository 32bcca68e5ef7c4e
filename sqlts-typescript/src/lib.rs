//! TypeScript query client generator for sqlts.
//!
//! Turns sqlc's analyzed queries into typed TypeScript functions for one of
//! five database client libraries: `pg`, `postgres`, `mysql2`,
//! `better-sqlite3` and `@libsql/client` (`turso`).
//!
//! # Usage
//!
//! ```
//! use sqlts_ir::{Column, Command, GenerateRequest, Query};
//!
//! let query = Query::new("GetAuthor", Command::One, "SELECT id FROM authors WHERE id = $1", "query.sql")
//!     .param(Column::new("id", "uuid").not_null())
//!     .column(Column::new("id", "uuid").not_null());
//! let request = GenerateRequest::new(vec![query], r#"{"driver":"pg"}"#);
//!
//! let response = sqlts_typescript::generate(&request).unwrap();
//! assert_eq!(response.files[0].name, "query_sql.ts");
//! ```
//!
//! # Generated Output
//!
//! One `.ts` file per query file, holding for every query:
//!
//! - the SQL text as an exported template-literal constant
//! - an `Args` interface when the query takes parameters
//! - a `Row` interface when the query returns columns
//! - an `async` function calling the client library

mod code_file;
mod declaration;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;
pub mod drivers;

pub use code_file::{BANNER, CodeFile};
pub use declaration::Declaration;
pub use drivers::{Driver, QueryFn, ReturnIface, create_driver};
pub use generator::{Generator, generate};
pub use naming::TS_NAMING;
pub use type_mapper::TsTypeMapper;
