//! Database client drivers.
//!
//! A [`Driver`] owns everything that differs between client libraries: the
//! SQL type table, the preamble of imports and helper types, and the shape of
//! the function body for each command kind. The generator stays
//! library-agnostic and only talks to this trait.

mod better_sqlite3;
mod mysql2;
mod pg;
mod postgres;
mod postgres_types;
mod sqlite;
mod turso;

pub use better_sqlite3::BetterSqlite3Driver;
pub use mysql2::Mysql2Driver;
pub use pg::PgDriver;
pub use postgres::PostgresDriver;
pub use turso::TursoDriver;

use sqlts_codegen::{CodeFragment, TypeMapper, TypeRef};
use sqlts_core::{DriverKind, Error, PluginOptions, Result};
use sqlts_ir::{Column, Command, Query};

use crate::{
    Declaration, TsTypeMapper,
    ast::{Fn, JsArray, JsObject, Param},
};

/// Resolved names for one generated query function.
#[derive(Debug, Clone, Copy)]
pub struct QueryFn<'a> {
    /// Generated function name (e.g. `getAuthor`).
    pub func_name: &'a str,
    /// Name of the exported SQL text constant (e.g. `getAuthorQuery`).
    pub query_const: &'a str,
    /// Query name as declared in SQL, used in diagnostics.
    pub query_name: &'a str,
    /// `Args` interface name, when the query takes parameters.
    pub arg_iface: Option<&'a str>,
    /// Resolved parameter field names, in placeholder order.
    pub arg_names: &'a [String],
}

/// What a row-returning function yields per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnIface<'a> {
    /// A generated `Row` interface.
    Row(&'a str),
    /// The query returns no columns.
    Void,
}

impl ReturnIface<'_> {
    pub fn type_ref(&self) -> TypeRef {
        match self {
            Self::Row(name) => TypeRef::named(*name),
            Self::Void => TypeRef::Unit,
        }
    }
}

/// Code generation strategy for one client library.
pub trait Driver {
    /// Selector string in plugin options (e.g. `"pg"`).
    fn name(&self) -> &'static str;

    /// The connection handle taken as first argument by every function.
    fn connection(&self) -> Param;

    /// Look up a normalized SQL type name in this driver's table.
    fn lookup_type(&self, normalized: &str) -> Option<TypeRef>;

    /// Type used for names missing from the table.
    fn fallback_type(&self) -> TypeRef;

    /// Strip any schema qualifier and lowercase.
    fn normalize_type(&self, ty: &str) -> String {
        let unqualified = ty.rsplit('.').next().unwrap_or(ty);
        unqualified.to_ascii_lowercase()
    }

    fn report_unknown_type(&self, ty: &str) {
        tracing::debug!(driver = self.name(), ty, "unknown column type");
    }

    /// TypeScript type of a parameter or result column.
    fn column_type(&self, column: Option<&Column>) -> TypeRef {
        let Some(column) = column else {
            return TypeRef::any();
        };
        let Some(ty) = column.ty.as_deref() else {
            return TypeRef::any();
        };

        let normalized = self.normalize_type(ty);
        let mut resolved = match self.lookup_type(&normalized) {
            Some(resolved) => resolved,
            None => {
                self.report_unknown_type(ty);
                self.fallback_type()
            }
        };

        if column.is_array || column.array_dims > 0 {
            let depth = column.array_dims.max(1) as usize;
            resolved = TypeRef::array_of_depth(resolved, depth);
        }
        if column.not_null {
            resolved
        } else {
            TypeRef::nullable(resolved)
        }
    }

    /// Imports and helper types shared by all queries of one file.
    fn preamble(&self, queries: &[&Query]) -> Vec<Declaration>;

    /// `:exec`: run the statement, return nothing.
    fn exec_decl(&self, query: &QueryFn<'_>) -> Declaration;

    /// `:execlastid`: run the statement, return the last inserted id.
    fn execlastid_decl(&self, query: &QueryFn<'_>) -> Result<Declaration> {
        Err(Error::unsupported(
            self.name(),
            Command::ExecLastId,
            query.query_name,
        ))
    }

    /// `:one`: exactly one row, otherwise `null`.
    fn one_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration;

    /// `:many`: every row, in result order.
    fn many_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration;
}

/// Build the driver selected by the plugin options.
pub fn create_driver(options: &PluginOptions) -> Result<Box<dyn Driver>> {
    let driver: Box<dyn Driver> = match options.driver_kind()? {
        DriverKind::Pg => Box::new(PgDriver),
        DriverKind::Postgres => Box::new(PostgresDriver),
        DriverKind::Mysql2 => Box::new(Mysql2Driver::new(options.mysql2)),
        DriverKind::BetterSqlite3 => Box::new(BetterSqlite3Driver::new(options.better_sqlite3)),
        DriverKind::Turso => Box::new(TursoDriver),
    };
    Ok(driver)
}

/// Function skeleton: `export async function f(conn, args?): Promise<T> {`.
pub(crate) fn query_function(connection: Param, query: &QueryFn<'_>, returns: TypeRef) -> Fn {
    let f = Fn::new(query.func_name).async_().param(connection);
    let f = match query.arg_iface {
        Some(iface) => f.param(Param::new("args", iface)),
        None => f,
    };
    f.returns(TsTypeMapper.render_type(&TypeRef::generic("Promise", vec![returns])))
}

/// `:one` return type: the row or `null`.
pub(crate) fn one_type(returns: ReturnIface<'_>) -> TypeRef {
    TypeRef::nullable(returns.type_ref())
}

/// `:many` return type: an array of rows.
pub(crate) fn many_type(returns: ReturnIface<'_>) -> TypeRef {
    TypeRef::array(returns.type_ref())
}

/// `[args.a, args.b]` in parameter order.
pub(crate) fn arg_values(query: &QueryFn<'_>) -> JsArray {
    JsArray::from_raw(query.arg_names.iter().map(|name| format!("args.{}", name)))
}

/// Return `null` unless `rows` holds exactly one element.
pub(crate) fn single_row_guard(rows: &str) -> CodeFragment {
    CodeFragment::block(
        format!("if ({}.length !== 1) {{", rows),
        vec!["return null;".into()],
        "}",
    )
}

/// `{ name: row[i], ... }` for array-mode rows.
pub(crate) fn positional_row(columns: &[String]) -> JsObject {
    columns
        .iter()
        .enumerate()
        .fold(JsObject::new(), |obj, (i, name)| {
            obj.raw(name.as_str(), format!("row[{}]", i))
        })
}
