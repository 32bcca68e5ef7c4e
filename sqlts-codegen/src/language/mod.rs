//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`NameResolver`] - Collision-free identifiers within one query

mod naming;
mod resolver;

pub use naming::NamingConvention;
pub use resolver::{NameResolver, resolve_names};
