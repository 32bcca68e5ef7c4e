//! Shared code generation utilities for sqlts.
//!
//! This crate provides language-agnostic abstractions used by the
//! TypeScript backend (`sqlts-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, TypeRef, etc.)
//! - [`language`] - Naming conventions and per-query identifier resolution

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, PrimitiveType, Renderable, TypeMapper, TypeRef};
pub use language::{NameResolver, NamingConvention};
