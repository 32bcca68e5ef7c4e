//! SQLite type affinity table shared by the embedded drivers.

use sqlts_codegen::TypeRef;

/// Declared types become lowercase with whitespace removed, so
/// `UNSIGNED BIG INT` and `unsignedbigint` are the same key.
pub(super) fn normalize(ty: &str) -> String {
    let unqualified = ty.rsplit('.').next().unwrap_or(ty);
    unqualified
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map a normalized SQLite type; `integer` is the type of integer columns.
pub(super) fn lookup(normalized: &str, integer: TypeRef) -> Option<TypeRef> {
    let ty = match normalized {
        "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint" | "unsignedbigint"
        | "int2" | "int8" => integer,
        "blob" => TypeRef::named("Buffer"),
        "real" | "double" | "doubleprecision" | "float" => TypeRef::number(),
        "boolean" | "bool" => TypeRef::boolean(),
        "date" | "datetime" | "timestamp" => TypeRef::named("Date"),
        _ => return None,
    };
    Some(ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_drops_whitespace() {
        assert_eq!(normalize("DOUBLE PRECISION"), "doubleprecision");
        assert_eq!(normalize("main.UNSIGNED BIG INT"), "unsignedbigint");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("integer", TypeRef::number()), Some(TypeRef::number()));
        assert_eq!(lookup("int8", TypeRef::bigint()), Some(TypeRef::bigint()));
        assert_eq!(lookup("real", TypeRef::bigint()), Some(TypeRef::number()));
        assert_eq!(lookup("blob", TypeRef::number()), Some(TypeRef::named("Buffer")));
        assert_eq!(lookup("text", TypeRef::number()), None);
    }
}
