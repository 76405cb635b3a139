//! The type-name mapper contract.
//!
//! The emitter never looks inside a [`TypeReference`]. Whenever a type must
//! become text it asks a [`TypeMapper`]; the only convention it relies on is
//! that nullable types come back with a trailing [`NULLABLE_MARKER`].

use tsdom_ir::TypeReference;

/// Suffix marking a nullable type in mapped text.
pub const NULLABLE_MARKER: char = '?';

/// Trait for mapping type references to target-language text.
///
/// Implement the hooks; [`TypeMapper::render_type`] walks generic arguments
/// and applies nullability on top of them.
pub trait TypeMapper {
    /// Map a non-generic type name.
    fn map_name(&self, name: &str) -> String;

    /// Map a generic type whose arguments are already rendered.
    fn map_generic(&self, name: &str, args: &[String]) -> String {
        if args.is_empty() {
            self.map_name(name)
        } else {
            format!("{}<{}>", self.map_name(name), args.join(", "))
        }
    }

    /// Mark rendered text as nullable.
    fn map_nullable(&self, inner: &str) -> String {
        if inner.ends_with(NULLABLE_MARKER) {
            inner.to_string()
        } else {
            format!("{}{}", inner, NULLABLE_MARKER)
        }
    }

    /// Whether the type may appear in an `extends` clause.
    fn is_valid_for_derivation(&self, ty: &TypeReference) -> bool;

    /// Render a complete type reference to text.
    fn render_type(&self, ty: &TypeReference) -> String {
        let text = if ty.args.is_empty() {
            self.map_name(&ty.name)
        } else {
            let args: Vec<String> = ty.args.iter().map(|a| self.render_type(a)).collect();
            self.map_generic(&ty.name, &args)
        };
        if ty.nullable {
            self.map_nullable(&text)
        } else {
            text
        }
    }
}

impl<T: TypeMapper + ?Sized> TypeMapper for &T {
    fn map_name(&self, name: &str) -> String {
        (**self).map_name(name)
    }

    fn map_generic(&self, name: &str, args: &[String]) -> String {
        (**self).map_generic(name, args)
    }

    fn map_nullable(&self, inner: &str) -> String {
        (**self).map_nullable(inner)
    }

    fn is_valid_for_derivation(&self, ty: &TypeReference) -> bool {
        (**self).is_valid_for_derivation(ty)
    }

    fn render_type(&self, ty: &TypeReference) -> String {
        (**self).render_type(ty)
    }
}

/// Split mapped type text into its base text and a nullability flag.
///
/// Every trailing marker is stripped, so `"string??"` yields `("string", true)`.
pub fn split_nullable(text: &str) -> (&str, bool) {
    let base = text.trim_end_matches(NULLABLE_MARKER);
    (base, base.len() != text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl TypeMapper for Identity {
        fn map_name(&self, name: &str) -> String {
            name.to_string()
        }

        fn is_valid_for_derivation(&self, ty: &TypeReference) -> bool {
            !ty.nullable
        }
    }

    #[test]
    fn test_render_generic() {
        let ty = TypeReference::generic(
            "Map",
            vec![TypeReference::new("K"), TypeReference::new("V").nullable()],
        );
        assert_eq!(Identity.render_type(&ty), "Map<K, V?>");
    }

    #[test]
    fn test_nullable_marker_not_doubled() {
        assert_eq!(Identity.map_nullable("T?"), "T?");
        assert_eq!(Identity.map_nullable("T"), "T?");
    }

    #[test]
    fn test_split_nullable() {
        assert_eq!(split_nullable("string?"), ("string", true));
        assert_eq!(split_nullable("string??"), ("string", true));
        assert_eq!(split_nullable("Array<number?>"), ("Array<number?>", false));
        assert_eq!(split_nullable(""), ("", false));
    }

    #[test]
    fn test_reference_impl() {
        let mapper = &Identity;
        assert_eq!(mapper.render_type(&TypeReference::new("X").nullable()), "X?");
        assert!(!mapper.is_valid_for_derivation(&TypeReference::new("X").nullable()));
    }
}
