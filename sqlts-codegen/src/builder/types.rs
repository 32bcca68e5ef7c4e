//! Language-agnostic type system for code generation.
//!
//! Drivers describe column types as [`TypeRef`] values; a [`TypeMapper`]
//! turns them into target-language syntax.

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type (string, number, boolean, etc.).
    Primitive(PrimitiveType),
    /// A type that may also be null.
    Nullable(Box<TypeRef>),
    /// An array/list type.
    Array(Box<TypeRef>),
    /// A named type provided by a library or the runtime (e.g. `Buffer`, `Date`).
    Named(String),
    /// A generic type with type arguments.
    Generic {
        /// Base type name (e.g., "Promise").
        base: String,
        /// Type arguments.
        args: Vec<TypeRef>,
    },
    /// An inline structural type with named fields.
    Object(Vec<(String, TypeRef)>),
    /// Any one of several types.
    Union(Vec<TypeRef>),
    /// Unit/void type.
    Unit,
}

impl TypeRef {
    /// Create a nullable type reference. Already-nullable types are returned unchanged.
    pub fn nullable(inner: TypeRef) -> Self {
        match inner {
            TypeRef::Nullable(_) => inner,
            other => Self::Nullable(Box::new(other)),
        }
    }

    /// Create an array type reference.
    pub fn array(inner: TypeRef) -> Self {
        Self::Array(Box::new(inner))
    }

    /// Wrap `inner` in `depth` array layers.
    pub fn array_of_depth(inner: TypeRef, depth: usize) -> Self {
        (0..depth).fold(inner, |ty, _| Self::array(ty))
    }

    /// Create a named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a generic type reference.
    pub fn generic(base: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Generic {
            base: base.into(),
            args,
        }
    }

    /// Create an inline object type.
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, TypeRef)>,
        S: Into<String>,
    {
        Self::Object(fields.into_iter().map(|(n, t)| (n.into(), t)).collect())
    }

    /// Create a union type.
    pub fn union(variants: Vec<TypeRef>) -> Self {
        Self::Union(variants)
    }

    /// Convenience: String type.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: Number type.
    pub fn number() -> Self {
        Self::Primitive(PrimitiveType::Number)
    }

    /// Convenience: BigInt type.
    pub fn bigint() -> Self {
        Self::Primitive(PrimitiveType::BigInt)
    }

    /// Convenience: Boolean type.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// Convenience: dynamic type.
    pub fn any() -> Self {
        Self::Primitive(PrimitiveType::Any)
    }

    /// Check if this type admits null at the top level.
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    /// Number of array layers directly below any top-level nullability.
    pub fn array_depth(&self) -> usize {
        match self {
            Self::Nullable(inner) => inner.array_depth(),
            Self::Array(inner) => 1 + inner.array_depth(),
            _ => 0,
        }
    }

    /// Whether rendering this type as an element needs grouping (e.g. `(a | b)[]`).
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Nullable(_) | Self::Union(_))
    }
}

/// Primitive types supported across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    /// Floating point or safe integer.
    Number,
    /// Arbitrary precision integer.
    BigInt,
    Boolean,
    /// Dynamic / unchecked value.
    Any,
}

impl PrimitiveType {
    /// Get the canonical name of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::BigInt => "bigint",
            Self::Boolean => "boolean",
            Self::Any => "any",
        }
    }
}

/// Trait for mapping types to language-specific representations.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map a nullable type (e.g., `T | null`).
    fn map_nullable(&self, inner: &str) -> String;

    /// Map an array type. `compound` is set when the element needs grouping.
    fn map_array(&self, inner: &str, compound: bool) -> String;

    /// Map a generic type with arguments.
    fn map_generic(&self, base: &str, args: &[String]) -> String {
        if args.is_empty() {
            base.to_string()
        } else {
            format!("{}<{}>", base, args.join(", "))
        }
    }

    /// Map an inline object type.
    fn map_object(&self, fields: &[(String, String)]) -> String;

    /// Map a union of types.
    fn map_union(&self, variants: &[String]) -> String;

    /// Map the unit type.
    fn map_unit(&self) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Nullable(inner) => {
                let inner_str = self.render_type(inner);
                self.map_nullable(&inner_str)
            }
            TypeRef::Array(inner) => {
                let inner_str = self.render_type(inner);
                self.map_array(&inner_str, inner.is_compound())
            }
            TypeRef::Named(name) => name.clone(),
            TypeRef::Generic { base, args } => {
                let arg_strs: Vec<_> = args.iter().map(|a| self.render_type(a)).collect();
                self.map_generic(base, &arg_strs)
            }
            TypeRef::Object(fields) => {
                let field_strs: Vec<_> = fields
                    .iter()
                    .map(|(name, ty)| (name.clone(), self.render_type(ty)))
                    .collect();
                self.map_object(&field_strs)
            }
            TypeRef::Union(variants) => {
                let variant_strs: Vec<_> = variants.iter().map(|v| self.render_type(v)).collect();
                self.map_union(&variant_strs)
            }
            TypeRef::Unit => self.map_unit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_type_as_str() {
        assert_eq!(PrimitiveType::String.as_str(), "string");
        assert_eq!(PrimitiveType::BigInt.as_str(), "bigint");
        assert_eq!(PrimitiveType::Any.as_str(), "any");
    }

    #[test]
    fn test_nullable_is_idempotent() {
        let once = TypeRef::nullable(TypeRef::string());
        let twice = TypeRef::nullable(once.clone());
        assert_eq!(once, twice);
        assert!(twice.is_nullable());
    }

    #[test]
    fn test_array_depth() {
        let ty = TypeRef::nullable(TypeRef::array_of_depth(TypeRef::number(), 3));
        assert_eq!(ty.array_depth(), 3);
        assert_eq!(TypeRef::named("Date").array_depth(), 0);
    }

    #[test]
    fn test_compound() {
        assert!(TypeRef::union(vec![TypeRef::number(), TypeRef::string()]).is_compound());
        assert!(TypeRef::nullable(TypeRef::number()).is_compound());
        assert!(!TypeRef::array(TypeRef::number()).is_compound());
    }

    #[test]
    fn test_object_constructor() {
        let point = TypeRef::object([("x", TypeRef::number()), ("y", TypeRef::number())]);
        assert!(matches!(point, TypeRef::Object(ref fields) if fields.len() == 2));
    }
}
