//! TypeScript query client generator.

use indexmap::IndexMap;
use sqlts_codegen::{TypeMapper, language::resolve_names};
use sqlts_core::{PluginOptions, Result};
use sqlts_ir::{Command, GenerateRequest, GenerateResponse, GeneratedFile, Query};

use crate::{
    BANNER, CodeFile, Declaration, TS_NAMING, TsTypeMapper,
    ast::{Const, Interface},
    drivers::{Driver, QueryFn, ReturnIface, create_driver},
};

/// Run one generation pass over a decoded request.
///
/// Fails as a whole: either every file is produced or none is.
pub fn generate(request: &GenerateRequest) -> Result<GenerateResponse> {
    let options = PluginOptions::from_bytes(&request.plugin_options)?;
    Generator::new(&options)?.generate(&request.queries)
}

/// TypeScript generator bound to one driver.
pub struct Generator {
    driver: Box<dyn Driver>,
}

impl Generator {
    pub fn new(options: &PluginOptions) -> Result<Self> {
        if let Some(runtime) = options.runtime.as_deref() {
            tracing::debug!(runtime, "runtime option is informational");
        }
        Ok(Self {
            driver: create_driver(options)?,
        })
    }

    /// Produce one `.ts` file per query file, in first-seen order.
    pub fn generate(&self, queries: &[Query]) -> Result<GenerateResponse> {
        let mut groups: IndexMap<&str, Vec<&Query>> = IndexMap::new();
        for query in queries {
            groups.entry(query.filename.as_str()).or_default().push(query);
        }

        let files = groups
            .iter()
            .map(|(filename, queries)| self.file(filename, queries))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            driver = self.driver.name(),
            queries = queries.len(),
            files = files.len(),
            "generated query clients"
        );
        Ok(GenerateResponse { files })
    }

    fn file(&self, filename: &str, queries: &[&Query]) -> Result<GeneratedFile> {
        let mut decls = self.driver.preamble(queries);
        for query in queries {
            decls.extend(self.query_decls(query)?);
        }

        let name = format!("{}.ts", TS_NAMING.file_name(filename));
        tracing::debug!(file = %name, declarations = decls.len(), "rendered file");
        let contents = CodeFile::new().banner(BANNER).add_all(decls).render();
        Ok(GeneratedFile::new(name, contents))
    }

    fn query_decls(&self, query: &Query) -> Result<Vec<Declaration>> {
        let func_name = TS_NAMING.function_name(&query.name);
        let type_name = TS_NAMING.type_name(&query.name);
        let query_const = format!("{}Query", func_name);
        let args_iface = format!("{}Args", type_name);
        let row_iface = format!("{}Row", type_name);

        let arg_names = resolve_names(
            &TS_NAMING,
            query
                .params
                .iter()
                .map(|p| p.column.as_ref().and_then(|c| c.name.as_deref())),
            "arg",
        );
        let column_names = resolve_names(
            &TS_NAMING,
            query.columns.iter().map(|c| c.name.as_deref()),
            "col",
        );

        let mut decls = vec![Declaration::from(Const::template(
            &query_const,
            &format!("-- name: {} {}\n{}", query.name, query.cmd, query.text),
        ))];

        if !query.params.is_empty() {
            let iface = query.params.iter().zip(&arg_names).fold(
                Interface::new(&args_iface),
                |iface, (param, name)| {
                    let ty = self.driver.column_type(param.column.as_ref());
                    iface.field(name, TsTypeMapper.render_type(&ty))
                },
            );
            decls.push(iface.into());
        }

        let returns = if query.columns.is_empty() {
            ReturnIface::Void
        } else {
            let iface = query.columns.iter().zip(&column_names).fold(
                Interface::new(&row_iface),
                |iface, (column, name)| {
                    let ty = self.driver.column_type(Some(column));
                    iface.field(name, TsTypeMapper.render_type(&ty))
                },
            );
            decls.push(iface.into());
            ReturnIface::Row(&row_iface)
        };

        let query_fn = QueryFn {
            func_name: &func_name,
            query_const: &query_const,
            query_name: &query.name,
            arg_iface: (!query.params.is_empty()).then_some(args_iface.as_str()),
            arg_names: &arg_names,
        };

        let function = match query.cmd {
            Command::Exec => self.driver.exec_decl(&query_fn),
            Command::ExecLastId => self.driver.execlastid_decl(&query_fn)?,
            Command::One => self.driver.one_decl(&query_fn, returns, &column_names),
            Command::Many => self.driver.many_decl(&query_fn, returns, &column_names),
        };
        decls.push(function);

        Ok(decls)
    }
}
