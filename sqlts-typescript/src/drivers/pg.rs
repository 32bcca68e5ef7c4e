//! Driver for node-postgres (`pg`).

use sqlts_codegen::{CodeFragment, TypeRef};
use sqlts_ir::Query;

use super::{
    Driver, QueryFn, ReturnIface, arg_values, many_type, one_type, positional_row,
    postgres_types::lookup_common, query_function, single_row_guard,
};
use crate::{
    Declaration,
    ast::{Import, Interface, JsObject, Param},
};

/// node-postgres in array row mode.
///
/// Functions take a structural `Client` so both `Client` and `Pool` fit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgDriver;

impl PgDriver {
    /// `client.query({ text, values, rowMode: "array" })` wrapped in `open`/`close`.
    fn query_call(&self, query: &QueryFn<'_>, open: &str) -> CodeFragment {
        JsObject::new()
            .raw("text", query.query_const)
            .array("values", arg_values(query))
            .string("rowMode", "array")
            .wrap(format!("{}client.query(", open), ");")
    }
}

impl Driver for PgDriver {
    fn name(&self) -> &'static str {
        "pg"
    }

    fn connection(&self) -> Param {
        Param::new("client", "Client")
    }

    fn lookup_type(&self, normalized: &str) -> Option<TypeRef> {
        lookup_common(normalized).or_else(|| {
            let ty = match normalized {
                "time" | "timetz" => TypeRef::named("Date"),
                "interval" => TypeRef::named("IPostgresInterval"),
                "point" => TypeRef::object([("x", TypeRef::number()), ("y", TypeRef::number())]),
                "circle" => TypeRef::object([
                    ("x", TypeRef::number()),
                    ("y", TypeRef::number()),
                    ("radius", TypeRef::number()),
                ]),
                _ => return None,
            };
            Some(ty)
        })
    }

    fn fallback_type(&self) -> TypeRef {
        TypeRef::string()
    }

    fn preamble(&self, queries: &[&Query]) -> Vec<Declaration> {
        let uses_interval = queries
            .iter()
            .flat_map(|q| q.all_columns())
            .filter_map(|c| c.ty.as_deref())
            .any(|ty| self.normalize_type(ty) == "interval");

        let mut decls = vec![
            Import::new("pg")
                .named("QueryArrayConfig")
                .named("QueryArrayResult")
                .into(),
        ];
        if uses_interval {
            decls.push(
                Import::new("postgres-interval")
                    .named("IPostgresInterval")
                    .into(),
            );
        }
        decls.push(
            Interface::new("Client")
                .private()
                .field(
                    "query",
                    "(config: QueryArrayConfig) => Promise<QueryArrayResult>",
                )
                .into(),
        );
        decls
    }

    fn exec_decl(&self, query: &QueryFn<'_>) -> Declaration {
        query_function(self.connection(), query, TypeRef::Unit)
            .fragment(self.query_call(query, "await "))
            .into()
    }

    fn one_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration {
        let f = query_function(self.connection(), query, one_type(returns))
            .fragment(self.query_call(query, "const result = await "))
            .fragment(single_row_guard("result.rows"));
        let f = match returns {
            ReturnIface::Row(_) => f
                .statement("const row = result.rows[0];")
                .fragment(positional_row(columns).wrap("return ", ";")),
            ReturnIface::Void => f.statement("return;"),
        };
        f.into()
    }

    fn many_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration {
        let f = query_function(self.connection(), query, many_type(returns))
            .fragment(self.query_call(query, "const result = await "));
        let f = match returns {
            ReturnIface::Row(_) => f.fragment(CodeFragment::block(
                "return result.rows.map(row => {",
                vec![positional_row(columns).wrap("return ", ";")],
                "});",
            )),
            ReturnIface::Void => f.statement("return result.rows.map(() => undefined);"),
        };
        f.into()
    }
}
