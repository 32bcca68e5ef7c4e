//! Top-level declarations of a generated file.

use sqlts_codegen::{CodeFragment, Renderable};

use crate::ast::{Const, Fn, Import, Interface, TypeAlias};

/// One unit of generated source.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Import(Import),
    TypeAlias(TypeAlias),
    Interface(Interface),
    Const(Const),
    Function(Fn),
}

impl Renderable for Declaration {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Self::Import(node) => node.to_fragments(),
            Self::TypeAlias(node) => node.to_fragments(),
            Self::Interface(node) => node.to_fragments(),
            Self::Const(node) => node.to_fragments(),
            Self::Function(node) => node.to_fragments(),
        }
    }
}

impl From<Import> for Declaration {
    fn from(node: Import) -> Self {
        Self::Import(node)
    }
}

impl From<TypeAlias> for Declaration {
    fn from(node: TypeAlias) -> Self {
        Self::TypeAlias(node)
    }
}

impl From<Interface> for Declaration {
    fn from(node: Interface) -> Self {
        Self::Interface(node)
    }
}

impl From<Const> for Declaration {
    fn from(node: Const) -> Self {
        Self::Const(node)
    }
}

impl From<Fn> for Declaration {
    fn from(node: Fn) -> Self {
        Self::Function(node)
    }
}
