//! TypeScript AST builders for generating imports, types, constants and functions.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod arrays;
mod consts;
mod fns;
mod imports;
mod interface;
mod objects;
mod types;

pub use arrays::JsArray;
pub use consts::Const;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use objects::JsObject;
pub use types::TypeAlias;

#[cfg(test)]
use sqlts_codegen::{CodeBuilder, Renderable};

/// Render a single node with TypeScript indentation.
#[cfg(test)]
pub(crate) fn build(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::typescript();
    builder.emit(node);
    builder.build()
}
