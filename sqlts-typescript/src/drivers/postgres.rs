//! Driver for Postgres.js (`postgres`).

use sqlts_codegen::TypeRef;
use sqlts_ir::Query;

use super::{
    Driver, QueryFn, ReturnIface, arg_values, many_type, one_type, positional_row,
    postgres_types::lookup_common, query_function, single_row_guard,
};
use crate::{
    Declaration,
    ast::{Import, Param},
};

/// Postgres.js through `sql.unsafe`, reading rows with `.values()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDriver;

impl PostgresDriver {
    fn unsafe_call(&self, query: &QueryFn<'_>) -> String {
        format!(
            "sql.unsafe({}, {})",
            query.query_const,
            arg_values(query).build()
        )
    }
}

impl Driver for PostgresDriver {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn connection(&self) -> Param {
        Param::new("sql", "Sql")
    }

    fn lookup_type(&self, normalized: &str) -> Option<TypeRef> {
        lookup_common(normalized).or_else(|| match normalized {
            "time" | "timetz" | "interval" | "point" | "circle" => Some(TypeRef::string()),
            _ => None,
        })
    }

    fn fallback_type(&self) -> TypeRef {
        TypeRef::string()
    }

    fn report_unknown_type(&self, ty: &str) {
        tracing::warn!(driver = self.name(), ty, "unknown column type, using string");
    }

    fn preamble(&self, _queries: &[&Query]) -> Vec<Declaration> {
        vec![Import::new("postgres").named("Sql").into()]
    }

    fn exec_decl(&self, query: &QueryFn<'_>) -> Declaration {
        query_function(self.connection(), query, TypeRef::Unit)
            .statement(format!("await {};", self.unsafe_call(query)))
            .into()
    }

    fn one_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration {
        let f = query_function(self.connection(), query, one_type(returns))
            .statement(format!(
                "const rows = await {}.values();",
                self.unsafe_call(query)
            ))
            .fragment(single_row_guard("rows"));
        let f = match returns {
            ReturnIface::Row(_) => f
                .statement("const row = rows[0];")
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
        let rows = format!("(await {}.values())", self.unsafe_call(query));
        let f = query_function(self.connection(), query, many_type(returns));
        let f = match returns {
            ReturnIface::Row(_) => f.fragment(
                positional_row(columns).wrap(format!("return {}.map(row => (", rows), "));"),
            ),
            ReturnIface::Void => f.statement(format!("return {}.map(() => undefined);", rows)),
        };
        f.into()
    }
}
