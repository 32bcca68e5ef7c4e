//! Type table shared by the two PostgreSQL drivers.

use sqlts_codegen::TypeRef;

/// Known PostgreSQL types delivered as text by both client libraries.
const STRING_TYPES: &[&str] = &[
    "aclitem",
    "bigserial",
    "bit",
    "box",
    "bpchar",
    "cid",
    "cidr",
    "inet",
    "int8",
    "line",
    "lseg",
    "macaddr",
    "macaddr8",
    "money",
    "numeric",
    "path",
    "pg_node_tree",
    "pg_snapshot",
    "polygon",
    "regproc",
    "regrole",
    "serial8",
    "text",
    "tid",
    "tsquery",
    "tsvector",
    "txid_snapshot",
    "uuid",
    "varbit",
    "varchar",
    "xid",
    "xml",
];

/// Types both PostgreSQL drivers parse the same way.
pub(super) fn lookup_common(normalized: &str) -> Option<TypeRef> {
    let ty = match normalized {
        "bool" => TypeRef::boolean(),
        "bytea" => TypeRef::named("Buffer"),
        "date" | "timestamp" | "timestamptz" => TypeRef::named("Date"),
        "float4" | "float8" | "int2" | "int4" | "oid" | "serial" | "serial2" | "serial4"
        | "smallserial" => TypeRef::number(),
        "json" | "jsonb" => TypeRef::any(),
        name if STRING_TYPES.contains(&name) => TypeRef::string(),
        _ => return None,
    };
    Some(ty)
}
