//! Expression trees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeReference;

/// An expression node.
///
/// Recursive fields are boxed; argument lists are owned vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum Expression {
    /// Reference to a method argument by name.
    ArgumentRef { name: String },
    /// `target.field`.
    FieldRef {
        target: Box<Expression>,
        field_name: String,
    },
    /// `target.method(args)`.
    MethodInvoke {
        target: Box<Expression>,
        method_name: String,
        #[serde(default)]
        args: Vec<Expression>,
    },
    /// Reference to a generic method, rendered as `target.method(T1, T2)`.
    MethodRef {
        target: Box<Expression>,
        method_name: String,
        #[serde(default)]
        type_args: Vec<TypeReference>,
    },
    /// `new Type(args)`.
    ObjectCreate {
        #[serde(rename = "type")]
        ty: TypeReference,
        #[serde(default)]
        args: Vec<Expression>,
    },
    /// A parameter declaration in expression position: `name: Type`.
    ParameterDecl {
        name: String,
        #[serde(rename = "type")]
        ty: TypeReference,
    },
    /// A literal value.
    Primitive { value: Literal },
    /// `target.property`.
    PropertyRef {
        target: Box<Expression>,
        property_name: String,
    },
    /// Raw expression text, emitted verbatim.
    Snippet { text: String },
    /// The `this` reference.
    This,
    /// A type used as an expression.
    TypeRef {
        #[serde(rename = "type")]
        ty: TypeReference,
    },
    /// Reference to a local variable by name.
    VariableRef { name: String },
    /// A known expression form that has no TypeScript rendering.
    Unsupported { form: UnsupportedExpression },
}

impl Expression {
    /// Create an argument reference.
    pub fn argument(name: impl Into<String>) -> Self {
        Self::ArgumentRef { name: name.into() }
    }

    /// Create a field reference.
    pub fn field(target: Expression, field_name: impl Into<String>) -> Self {
        Self::FieldRef {
            target: Box::new(target),
            field_name: field_name.into(),
        }
    }

    /// Create a method invocation.
    pub fn invoke(
        target: Expression,
        method_name: impl Into<String>,
        args: Vec<Expression>,
    ) -> Self {
        Self::MethodInvoke {
            target: Box::new(target),
            method_name: method_name.into(),
            args,
        }
    }

    /// Create a generic method reference.
    pub fn method_ref(
        target: Expression,
        method_name: impl Into<String>,
        type_args: Vec<TypeReference>,
    ) -> Self {
        Self::MethodRef {
            target: Box::new(target),
            method_name: method_name.into(),
            type_args,
        }
    }

    /// Create an object creation expression.
    pub fn new_object(ty: TypeReference, args: Vec<Expression>) -> Self {
        Self::ObjectCreate { ty, args }
    }

    /// Create a parameter declaration expression.
    pub fn parameter(name: impl Into<String>, ty: TypeReference) -> Self {
        Self::ParameterDecl {
            name: name.into(),
            ty,
        }
    }

    /// Create a literal expression.
    pub fn primitive(value: Literal) -> Self {
        Self::Primitive { value }
    }

    /// Convenience: string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self::primitive(Literal::String(value.into()))
    }

    /// Convenience: integer literal.
    pub fn int(value: i64) -> Self {
        Self::primitive(Literal::Int(value))
    }

    /// Create a property reference.
    pub fn property(target: Expression, property_name: impl Into<String>) -> Self {
        Self::PropertyRef {
            target: Box::new(target),
            property_name: property_name.into(),
        }
    }

    /// Create a raw snippet expression.
    pub fn snippet(text: impl Into<String>) -> Self {
        Self::Snippet { text: text.into() }
    }

    /// Create a type reference expression.
    pub fn type_ref(ty: TypeReference) -> Self {
        Self::TypeRef { ty }
    }

    /// Create a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::VariableRef { name: name.into() }
    }

    /// Create an unsupported expression placeholder.
    pub fn unsupported(form: UnsupportedExpression) -> Self {
        Self::Unsupported { form }
    }

    /// Get the literal value if this is a constant expression.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Primitive { value } => Some(value),
            _ => None,
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Plain value text, without quoting.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) if v.is_nan() => f.write_str("NaN"),
            Literal::Float(v) if v.is_infinite() => {
                f.write_str(if v.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            Literal::Float(v) => write!(f, "{}", v),
            Literal::String(v) => f.write_str(v),
        }
    }
}

/// Expression forms the emitter knows about but does not render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedExpression {
    ArrayCreate,
    ArrayIndexer,
    BaseReference,
    BinaryOperator,
    Cast,
    DefaultValue,
    DelegateCreate,
    DelegateInvoke,
    Direction,
    EventReference,
    Indexer,
    PropertySetValueReference,
    TypeOf,
}

impl UnsupportedExpression {
    /// Get a human-readable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArrayCreate => "array creation",
            Self::ArrayIndexer => "array indexer",
            Self::BaseReference => "base reference",
            Self::BinaryOperator => "binary operator",
            Self::Cast => "cast",
            Self::DefaultValue => "default value",
            Self::DelegateCreate => "delegate creation",
            Self::DelegateInvoke => "delegate invocation",
            Self::Direction => "direction",
            Self::EventReference => "event reference",
            Self::Indexer => "indexer",
            Self::PropertySetValueReference => "property set-value reference",
            Self::TypeOf => "typeof",
        }
    }
}
