//! Type references and generic type parameters.

use serde::{Deserialize, Serialize};

/// An abstract reference to a type.
///
/// The reference carries a base name, a nullability flag and generic
/// arguments. It is deliberately opaque to the emitter: only a
/// `TypeMapper` turns it into target-language text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeReference {
    /// Base type name (e.g. "string", "System.Int32", "List", "Hero").
    pub name: String,
    /// Whether the referenced type is nullable.
    #[serde(default)]
    pub nullable: bool,
    /// Generic type arguments, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeReference>,
}

impl TypeReference {
    /// Create a non-nullable, non-generic type reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            args: Vec::new(),
        }
    }

    /// Create a generic type reference.
    pub fn generic(name: impl Into<String>, args: Vec<TypeReference>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            args,
        }
    }

    /// Mark this reference as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Convenience: `string`.
    pub fn string() -> Self {
        Self::new("string")
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::new("int")
    }

    /// Convenience: `bool`.
    pub fn bool() -> Self {
        Self::new("bool")
    }

    /// Convenience: `void`.
    pub fn void() -> Self {
        Self::new("void")
    }

    /// Check whether the reference has generic arguments.
    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

/// A generic type parameter of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeParameter {
    /// Parameter name (e.g. "T").
    pub name: String,
    /// Constraint types. Only the first one is ever rendered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<TypeReference>,
}

impl TypeParameter {
    /// Create an unconstrained type parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// Add a constraint.
    pub fn constraint(mut self, ty: TypeReference) -> Self {
        self.constraints.push(ty);
        self
    }
}
