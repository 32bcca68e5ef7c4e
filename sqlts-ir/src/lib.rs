//! Intermediate representation types for sqlts.
//!
//! This crate provides the query description that every driver consumes,
//! together with the request/response envelope exchanged with sqlc.
//!
//! # Architecture
//!
//! ```text
//! sqlc (protobuf) → wire (decoding) → sqlts-ir (Query/Column/Parameter) → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Immutable once received
//! - Serializable as camelCase JSON for debugging and tests

mod query;
mod request;

pub mod wire;

pub use query::{Column, Command, Parameter, Query, UnknownCommand};
pub use request::{GenerateRequest, GenerateResponse, GeneratedFile};
