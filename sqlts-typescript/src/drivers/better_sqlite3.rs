//! Driver for `better-sqlite3`.

use sqlts_codegen::{CodeFragment, TypeRef};
use sqlts_core::BetterSqlite3Options;
use sqlts_ir::Query;

use super::{
    Driver, QueryFn, ReturnIface, many_type, one_type, positional_row, query_function,
    single_row_guard, sqlite,
};
use crate::{
    Declaration,
    ast::{Fn, Import, Param},
};

/// better-sqlite3 prepared statements.
///
/// Row-returning statements run in raw mode so columns are read by position,
/// like the array-mode drivers. No `:execlastid`: the library reports it per
/// statement run, not portably across the generated API.
#[derive(Debug, Clone, Copy, Default)]
pub struct BetterSqlite3Driver {
    options: BetterSqlite3Options,
}

impl BetterSqlite3Driver {
    pub fn new(options: BetterSqlite3Options) -> Self {
        Self { options }
    }

    /// Shared function head: signature plus `const stmt = database.prepare(...)`.
    ///
    /// `raw` is only valid on statements that return data.
    fn prepared(&self, query: &QueryFn<'_>, returns: TypeRef, raw: bool) -> Fn {
        let mut prepare = format!("const stmt = database.prepare({})", query.query_const);
        if self.options.safe_integers {
            prepare.push_str(".safeIntegers(true)");
        }
        if raw {
            prepare.push_str(".raw(true)");
        }
        prepare.push(';');
        query_function(self.connection(), query, returns).statement(prepare)
    }

    /// `const rows = await stmt.all(...)`, typed as arrays in raw mode.
    fn all_rows(&self, query: &QueryFn<'_>, returns: ReturnIface<'_>) -> String {
        match returns {
            ReturnIface::Row(_) => format!(
                "const rows = await stmt.all({}) as any[][];",
                self.args(query)
            ),
            ReturnIface::Void => format!("const rows = await stmt.all({});", self.args(query)),
        }
    }

    fn args(&self, query: &QueryFn<'_>) -> String {
        query
            .arg_names
            .iter()
            .map(|name| format!("args.{}", name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Driver for BetterSqlite3Driver {
    fn name(&self) -> &'static str {
        "better-sqlite3"
    }

    fn connection(&self) -> Param {
        Param::new("database", "Database")
    }

    fn normalize_type(&self, ty: &str) -> String {
        sqlite::normalize(ty)
    }

    fn lookup_type(&self, normalized: &str) -> Option<TypeRef> {
        let integer = if self.options.safe_integers {
            TypeRef::bigint()
        } else {
            TypeRef::number()
        };
        sqlite::lookup(normalized, integer)
    }

    fn fallback_type(&self) -> TypeRef {
        TypeRef::any()
    }

    fn preamble(&self, _queries: &[&Query]) -> Vec<Declaration> {
        vec![Import::new("better-sqlite3").named("Database").into()]
    }

    fn exec_decl(&self, query: &QueryFn<'_>) -> Declaration {
        self.prepared(query, TypeRef::Unit, false)
            .statement(format!("await stmt.run({});", self.args(query)))
            .into()
    }

    fn one_decl(
        &self,
        query: &QueryFn<'_>,
        returns: ReturnIface<'_>,
        columns: &[String],
    ) -> Declaration {
        let raw = matches!(returns, ReturnIface::Row(_));
        let f = self
            .prepared(query, one_type(returns), raw)
            .statement(self.all_rows(query, returns))
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
        let raw = matches!(returns, ReturnIface::Row(_));
        let f = self
            .prepared(query, many_type(returns), raw)
            .statement(self.all_rows(query, returns));
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
    use sqlts_core::ErrorKind;
    use sqlts_ir::Column;

    use super::*;
    use crate::TsTypeMapper;

    fn render(decl: &Declaration) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(decl);
        builder.build()
    }

    fn query<'a>(names: &'a [String]) -> QueryFn<'a> {
        QueryFn {
            func_name: "getAuthor",
            query_const: "getAuthorQuery",
            query_name: "GetAuthor",
            arg_iface: Some("GetAuthorArgs"),
            arg_names: names,
        }
    }

    #[test]
    fn test_type_table() {
        let driver = BetterSqlite3Driver::default();
        let render_type = |ty: &str| {
            TsTypeMapper.render_type(&driver.column_type(Some(&Column::new("c", ty).not_null())))
        };
        assert_eq!(render_type("INTEGER"), "number");
        assert_eq!(render_type("DOUBLE PRECISION"), "number");
        assert_eq!(render_type("BOOLEAN"), "boolean");
        assert_eq!(render_type("TEXT"), "any");
    }

    #[test]
    fn test_safe_integers() {
        let driver = BetterSqlite3Driver::new(BetterSqlite3Options {
            safe_integers: true,
        });
        let column = Column::new("id", "integer").not_null();
        assert_eq!(driver.column_type(Some(&column)), TypeRef::bigint());

        let names = vec!["id".to_string()];
        let out = render(&driver.exec_decl(&query(&names)));
        assert_eq!(
            out,
            "export async function getAuthor(database: Database, args: GetAuthorArgs): Promise<void> {\n  const stmt = database.prepare(getAuthorQuery).safeIntegers(true);\n  await stmt.run(args.id);\n}\n"
        );
    }

    #[test]
    fn test_one_reads_raw_row_by_position() {
        let names = vec!["id".to_string()];
        let out = render(&BetterSqlite3Driver::default().one_decl(
            &query(&names),
            ReturnIface::Row("GetAuthorRow"),
            &["authorId".to_string(), "id".to_string()],
        ));
        assert_eq!(
            out,
            "export async function getAuthor(database: Database, args: GetAuthorArgs): Promise<GetAuthorRow | null> {\n  const stmt = database.prepare(getAuthorQuery).raw(true);\n  const rows = await stmt.all(args.id) as any[][];\n  if (rows.length !== 1) {\n    return null;\n  }\n  const row = rows[0];\n  return {\n    authorId: row[0],\n    id: row[1],\n  };\n}\n"
        );
    }

    #[test]
    fn test_void_rows_skip_raw_mode() {
        let out = render(&BetterSqlite3Driver::default().many_decl(
            &query(&[]),
            ReturnIface::Void,
            &[],
        ));
        assert!(out.contains("const stmt = database.prepare(getAuthorQuery);\n"));
        assert!(out.contains("return rows.map(() => undefined);"));
    }

    #[test]
    fn test_execlastid_is_refused() {
        let err = BetterSqlite3Driver::default()
            .execlastid_decl(&query(&[]))
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    }
}
