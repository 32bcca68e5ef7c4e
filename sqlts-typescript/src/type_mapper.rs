//! TypeScript type mapper implementation.

use sqlts_codegen::{PrimitiveType, TypeMapper};

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsTypeMapper;

impl TypeMapper for TsTypeMapper {
    fn map_primitive(&self, ty: PrimitiveType) -> String {
        ty.as_str().to_string()
    }

    fn map_nullable(&self, inner: &str) -> String {
        format!("{} | null", inner)
    }

    fn map_array(&self, inner: &str, compound: bool) -> String {
        if compound {
            format!("({})[]", inner)
        } else {
            format!("{}[]", inner)
        }
    }

    fn map_object(&self, fields: &[(String, String)]) -> String {
        if fields.is_empty() {
            return "{}".to_string();
        }
        let body = fields
            .iter()
            .map(|(name, ty)| format!("{}: {}", name, ty))
            .collect::<Vec<_>>()
            .join("; ");
        format!("{{ {} }}", body)
    }

    fn map_union(&self, variants: &[String]) -> String {
        variants.join(" | ")
    }

    fn map_unit(&self) -> String {
        "void".to_string()
    }
}
