//! Driver for `@libsql/client` (Turso).

use sqlts_codegen::{CodeFragment, TypeRef};
use sqlts_core::Result;
use sqlts_ir::Query;

use super::{
    Driver, QueryFn, ReturnIface, arg_values, many_type, one_type, positional_row,
    query_function, single_row_guard, sqlite,
};
use crate::{
    Declaration,
    ast::{Import, JsObject, Param},
};

/// libsql rows are indexable, so columns are read by position.
#[derive(Debug, Clone, Copy, Default)]
pub struct TursoDriver;

impl TursoDriver {
    fn execute(&self, query: &QueryFn<'_>, open: &str) -> CodeFragment {
        JsObject::new()
            .raw("sql", query.query_const)
            .array("args", arg_values(query))
            .wrap(format!("{}client.execute(", open), ");")
    }
}

impl Driver for TursoDriver {
    fn name(&self) -> &'static str {
        "turso"
    }

    fn connection(&self) -> Param {
        Param::new("client", "Client")
    }

    fn normalize_type(&self, ty: &str) -> String {
        sqlite::normalize(ty)
    }

    fn lookup_type(&self, normalized: &str) -> Option<TypeRef> {
        sqlite::lookup(normalized, TypeRef::number())
    }

    fn fallback_type(&self) -> TypeRef {
        TypeRef::any()
    }

    fn preamble(&self, _queries: &[&Query]) -> Vec<Declaration> {
        vec![Import::new("@libsql/client").named("Client").into()]
    }

    fn exec_decl(&self, query: &QueryFn<'_>) -> Declaration {
        query_function(self.connection(), query, TypeRef::Unit)
            .fragment(self.execute(query, "await "))
            .into()
    }

    fn execlastid_decl(&self, query: &QueryFn<'_>) -> Result<Declaration> {
        let returns = TypeRef::nullable(TypeRef::bigint());
        Ok(query_function(self.connection(), query, returns)
            .fragment(self.execute(query, "const result = await "))
            .statement("return result.lastInsertRowid ?? null;")
            .into())
    }

    fn one_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration {
        let f = query_function(self.connection(), query, one_type(returns))
            .fragment(self.execute(query, "const result = await "))
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
            .fragment(self.execute(query, "const result = await "));
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

#[cfg(test)]
mod tests {
    use sqlts_codegen::{CodeBuilder, TypeMapper};
    use sqlts_ir::Column;

    use super::*;
    use crate::TsTypeMapper;

    fn render(decl: &Declaration) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(decl);
        builder.build()
    }

    #[test]
    fn test_unknown_type_is_any() {
        let column = Column::new("payload", "JSONB").not_null();
        let ty = TursoDriver.column_type(Some(&column));
        assert_eq!(TsTypeMapper.render_type(&ty), "any");
    }

    #[test]
    fn test_execlastid_returns_rowid() {
        let names = vec!["name".to_string(), "bio".to_string()];
        let query = QueryFn {
            func_name: "createAuthor",
            query_const: "createAuthorQuery",
            query_name: "CreateAuthor",
            arg_iface: Some("CreateAuthorArgs"),
            arg_names: &names,
        };
        let out = render(&TursoDriver.execlastid_decl(&query).unwrap());
        assert_eq!(
            out,
            "export async function createAuthor(client: Client, args: CreateAuthorArgs): Promise<bigint | null> {\n  const result = await client.execute({\n    sql: createAuthorQuery,\n    args: [args.name, args.bio],\n  });\n  return result.lastInsertRowid ?? null;\n}\n"
        );
    }

    #[test]
    fn test_one_reads_row_by_position() {
        let names = vec!["id".to_string()];
        let query = QueryFn {
            func_name: "getPair",
            query_const: "getPairQuery",
            query_name: "GetPair",
            arg_iface: Some("GetPairArgs"),
            arg_names: &names,
        };
        let columns = ["authorId".to_string(), "id".to_string(), "id_2".to_string()];
        let out = render(&TursoDriver.one_decl(&query, ReturnIface::Row("GetPairRow"), &columns));
        assert!(out.contains("  const row = result.rows[0];\n"));
        assert!(out.contains("    authorId: row[0],\n    id: row[1],\n    id_2: row[2],\n"));
        assert!(!out.contains("as unknown"));
    }
}
