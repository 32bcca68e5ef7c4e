//! TypeScript function builder.

use sqlts_codegen::{CodeFragment, Renderable};

/// A parameter in a TypeScript function.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    fn signature(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}: {}", self.name, optional, self.ty)
    }
}

/// Builder for TypeScript functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Fn {
    name: String,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a single-line statement to the function body.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add a structured fragment (nested blocks, object literals) to the body.
    pub fn fragment(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };
        let params = self
            .params
            .iter()
            .map(Param::signature)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}({}): {} {{",
                export, async_kw, self.name, params, ret
            ),
            None => format!("{}{}function {}({}) {{", export, async_kw, self.name, params),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(self.signature(), self.body.clone(), "}")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build;

    #[test]
    fn test_async_function_with_params() {
        let f = build(
            &Fn::new("getAuthor")
                .async_()
                .param(Param::new("client", "Client"))
                .param(Param::new("args", "GetAuthorArgs"))
                .returns("Promise<GetAuthorRow | null>")
                .statement("return null;"),
        );
        assert_eq!(
            f,
            "export async function getAuthor(client: Client, args: GetAuthorArgs): Promise<GetAuthorRow | null> {\n  return null;\n}\n"
        );
    }

    #[test]
    fn test_private_function_with_nested_block() {
        let f = build(
            &Fn::new("check")
                .private()
                .param(Param::new("flag", "boolean").optional())
                .fragment(CodeFragment::block(
                    "if (flag) {",
                    vec!["return;".into()],
                    "}",
                )),
        );
        assert_eq!(
            f,
            "function check(flag?: boolean) {\n  if (flag) {\n    return;\n  }\n}\n"
        );
    }

    #[test]
    fn test_empty_body() {
        let f = build(&Fn::new("noop").returns("void"));
        assert_eq!(f, "export function noop(): void {\n}\n");
    }
}
