//! Driver for `mysql2/promise`.

use sqlts_codegen::{CodeFragment, TypeRef};
use sqlts_core::{Mysql2Options, Result};
use sqlts_ir::{Command, Query};

use super::{
    Driver, QueryFn, ReturnIface, arg_values, many_type, one_type, positional_row,
    query_function, single_row_guard,
};
use crate::{
    Declaration,
    ast::{Import, JsObject, Param, TypeAlias},
};

/// mysql2 promise API with `rowsAsArray` result rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mysql2Driver {
    options: Mysql2Options,
}

impl Mysql2Driver {
    pub fn new(options: Mysql2Options) -> Self {
        Self { options }
    }

    /// `bigint` as delivered under the connection's big number flags.
    fn bigint_type(&self) -> TypeRef {
        match (
            self.options.support_big_numbers,
            self.options.big_number_strings,
        ) {
            (true, true) => TypeRef::string(),
            (true, false) => TypeRef::union(vec![TypeRef::number(), TypeRef::string()]),
            (false, _) => TypeRef::number(),
        }
    }

    fn query_call(&self, query: &QueryFn<'_>, open: &str, rows_as_array: bool) -> CodeFragment {
        let options = JsObject::new()
            .raw("sql", query.query_const)
            .array("values", arg_values(query));
        let options = if rows_as_array {
            options.raw("rowsAsArray", "true")
        } else {
            options
        };
        options.wrap(format!("{}(", open), ");")
    }

    fn select_rows(&self, query: &QueryFn<'_>) -> CodeFragment {
        self.query_call(
            query,
            "const [rows] = await client.query<RowDataPacket[]>",
            true,
        )
    }
}

impl Driver for Mysql2Driver {
    fn name(&self) -> &'static str {
        "mysql2"
    }

    fn connection(&self) -> Param {
        Param::new("client", "Client")
    }

    fn lookup_type(&self, normalized: &str) -> Option<TypeRef> {
        let ty = match normalized {
            "bigint" => self.bigint_type(),
            "binary" | "bit" | "blob" | "longblob" | "mediumblob" | "tinyblob" | "varbinary" => {
                TypeRef::named("Buffer")
            }
            "date" | "datetime" | "timestamp" => TypeRef::named("Date"),
            "double" | "float" | "int" | "mediumint" | "smallint" | "tinyint" | "year" => {
                TypeRef::number()
            }
            "json" => TypeRef::any(),
            "char" | "decimal" | "longtext" | "mediumtext" | "text" | "time" | "tinytext"
            | "varchar" => TypeRef::string(),
            _ => return None,
        };
        Some(ty)
    }

    fn fallback_type(&self) -> TypeRef {
        TypeRef::string()
    }

    fn preamble(&self, queries: &[&Query]) -> Vec<Declaration> {
        let needs_header = queries.iter().any(|q| q.cmd == Command::ExecLastId);
        vec![
            Import::new("mysql2/promise")
                .default("mysql")
                .named("RowDataPacket")
                .named_if(needs_header, "ResultSetHeader")
                .into(),
            TypeAlias::new("Client", "mysql.Connection | mysql.Pool")
                .private()
                .into(),
        ]
    }

    fn exec_decl(&self, query: &QueryFn<'_>) -> Declaration {
        query_function(self.connection(), query, TypeRef::Unit)
            .fragment(self.query_call(query, "await client.query", false))
            .into()
    }

    fn execlastid_decl(&self, query: &QueryFn<'_>) -> Result<Declaration> {
        Ok(query_function(self.connection(), query, TypeRef::number())
            .fragment(self.query_call(
                query,
                "const [result] = await client.query<ResultSetHeader>",
                false,
            ))
            .statement("return result.insertId;")
            .into())
    }

    fn one_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration {
        let f = query_function(self.connection(), query, one_type(returns))
            .fragment(self.select_rows(query))
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
        let f = query_function(self.connection(), query, many_type(returns))
            .fragment(self.select_rows(query));
        let f = match returns {
            ReturnIface::Row(_) => f.fragment(CodeFragment::block(
                "return rows.map(row => {",
                vec![positional_row(columns).wrap("return ", ";")],
                "});",
            )),
            ReturnIface::Void => f.statement("return rows.map(() => undefined);"),
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

    fn bigint_with(support_big_numbers: bool, big_number_strings: bool) -> String {
        let driver = Mysql2Driver::new(Mysql2Options {
            support_big_numbers,
            big_number_strings,
        });
        let column = Column::new("id", "bigint").not_null();
        TsTypeMapper.render_type(&driver.column_type(Some(&column)))
    }

    #[test]
    fn test_bigint_follows_options() {
        assert_eq!(bigint_with(false, false), "number");
        assert_eq!(bigint_with(false, true), "number");
        assert_eq!(bigint_with(true, false), "number | string");
        assert_eq!(bigint_with(true, true), "string");
    }

    #[test]
    fn test_nullable_bigint_union_array() {
        let driver = Mysql2Driver::new(Mysql2Options {
            support_big_numbers: true,
            big_number_strings: false,
        });
        let column = Column::new("ids", "bigint").array(1);
        assert_eq!(
            TsTypeMapper.render_type(&driver.column_type(Some(&column))),
            "(number | string)[] | null"
        );
    }

    #[test]
    fn test_preamble_imports_header_for_execlastid() {
        let select = Query::new("A", Command::Many, "SELECT 1", "q.sql");
        let insert = Query::new("B", Command::ExecLastId, "INSERT", "q.sql");
        let driver = Mysql2Driver::default();

        assert_eq!(
            render(&driver.preamble(&[&select])[0]),
            "import mysql, { RowDataPacket } from \"mysql2/promise\";\n"
        );
        let decls = driver.preamble(&[&select, &insert]);
        assert_eq!(
            render(&decls[0]),
            "import mysql, { RowDataPacket, ResultSetHeader } from \"mysql2/promise\";\n"
        );
        assert_eq!(
            render(&decls[1]),
            "type Client = mysql.Connection | mysql.Pool;\n"
        );
    }

    #[test]
    fn test_execlastid_returns_insert_id() {
        let names = vec!["name".to_string()];
        let query = QueryFn {
            func_name: "createAuthor",
            query_const: "createAuthorQuery",
            query_name: "CreateAuthor",
            arg_iface: Some("CreateAuthorArgs"),
            arg_names: &names,
        };
        let out = render(&Mysql2Driver::default().execlastid_decl(&query).unwrap());
        assert_eq!(
            out,
            "export async function createAuthor(client: Client, args: CreateAuthorArgs): Promise<number> {\n  const [result] = await client.query<ResultSetHeader>({\n    sql: createAuthorQuery,\n    values: [args.name],\n  });\n  return result.insertId;\n}\n"
        );
    }
}
