//! Type declarations and their members.

use serde::{Deserialize, Serialize};

use crate::{Expression, Statement, TypeParameter, TypeReference};

/// The kind of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
}

impl TypeKind {
    /// Get the TypeScript keyword for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        }
    }
}

/// Visibility of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Rendered with the `export` modifier.
    #[default]
    Public,
    /// Rendered without a modifier.
    Private,
}

impl Visibility {
    /// Check if this is a public visibility.
    pub fn is_public(&self) -> bool {
        matches!(self, Self::Public)
    }
}

/// A class, interface or enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Declaration kind.
    pub kind: TypeKind,
    /// Type name.
    pub name: String,
    /// Generic type parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<TypeParameter>,
    /// Base types (superclass and implemented interfaces).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_types: Vec<TypeReference>,
    /// Visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// Members in declaration order.
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeDeclaration {
    /// Create a new public declaration of the given kind.
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            type_parameters: Vec::new(),
            base_types: Vec::new(),
            visibility: Visibility::Public,
            members: Vec::new(),
        }
    }

    /// Create a new public class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    /// Create a new public interface.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    /// Create a new public enum.
    pub fn enum_(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Enum, name)
    }

    /// Make this declaration private (not exported).
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Add a generic type parameter.
    pub fn type_parameter(mut self, param: TypeParameter) -> Self {
        self.type_parameters.push(param);
        self
    }

    /// Add a base type.
    pub fn base_type(mut self, ty: TypeReference) -> Self {
        self.base_types.push(ty);
        self
    }

    /// Add a member.
    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Add multiple members.
    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Check if this declaration is an enum.
    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }
}

/// A member of a type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    /// A field. Enum members are fields with an optional constant initializer.
    Field {
        name: String,
        #[serde(rename = "type")]
        ty: TypeReference,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Expression>,
    },
    /// A property.
    Property {
        name: String,
        #[serde(rename = "type")]
        ty: TypeReference,
    },
    /// A method or constructor.
    Method(Method),
    /// Raw member text, emitted verbatim.
    Snippet { text: String },
}

impl Member {
    /// Create a field member.
    pub fn field(name: impl Into<String>, ty: TypeReference) -> Self {
        Self::Field {
            name: name.into(),
            ty,
            init: None,
        }
    }

    /// Create an enum member, optionally with a constant initializer.
    ///
    /// The member type is irrelevant for enums and left as `int`.
    pub fn enum_member(name: impl Into<String>, init: Option<Expression>) -> Self {
        Self::Field {
            name: name.into(),
            ty: TypeReference::int(),
            init,
        }
    }

    /// Create a property member.
    pub fn property(name: impl Into<String>, ty: TypeReference) -> Self {
        Self::Property {
            name: name.into(),
            ty,
        }
    }

    /// Create a raw snippet member.
    pub fn snippet(text: impl Into<String>) -> Self {
        Self::Snippet { text: text.into() }
    }

    /// Get the member name, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Field { name, .. } | Member::Property { name, .. } => Some(name),
            Member::Method(method) => Some(&method.name),
            Member::Snippet { .. } => None,
        }
    }
}

impl From<Method> for Member {
    fn from(method: Method) -> Self {
        Member::Method(method)
    }
}

/// A method or constructor declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method name. Ignored for constructors.
    pub name: String,
    /// Whether this is a constructor.
    #[serde(default)]
    pub is_constructor: bool,
    /// Parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Return type (None for no return type clause).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeReference>,
    /// Body statements.
    #[serde(default)]
    pub body: Vec<Statement>,
    /// Documentation comment lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc: Vec<String>,
}

impl Method {
    /// Create a new method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_constructor: false,
            parameters: Vec::new(),
            return_type: None,
            body: Vec::new(),
            doc: Vec::new(),
        }
    }

    /// Create a new constructor.
    pub fn constructor() -> Self {
        Self {
            is_constructor: true,
            ..Self::new("constructor")
        }
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: TypeReference) -> Self {
        self.parameters.push(Parameter::new(name, ty));
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeReference) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Add a documentation line.
    pub fn doc_line(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line.into());
        self
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeReference,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeReference) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Literal;

    #[test]
    fn test_type_kind_keyword() {
        assert_eq!(TypeKind::Class.keyword(), "class");
        assert_eq!(TypeKind::Interface.keyword(), "interface");
        assert_eq!(TypeKind::Enum.keyword(), "enum");
    }

    #[test]
    fn test_declaration_builder() {
        let decl = TypeDeclaration::class("Hero")
            .private()
            .base_type(TypeReference::new("Person"))
            .member(Member::field("name", TypeReference::string()));

        assert_eq!(decl.name, "Hero");
        assert!(!decl.visibility.is_public());
        assert!(!decl.is_enum());
        assert_eq!(decl.base_types.len(), 1);
        assert_eq!(decl.members[0].name(), Some("name"));
    }

    #[test]
    fn test_constructor() {
        let ctor = Method::constructor().param("baseUri", TypeReference::string());
        assert!(ctor.is_constructor);
        assert_eq!(ctor.parameters.len(), 1);
        assert!(ctor.return_type.is_none());
    }

    #[test]
    fn test_member_json_shape() {
        let member = Member::enum_member("B", Some(Expression::primitive(Literal::Int(2))));
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["member"], "field");
        assert_eq!(json["name"], "B");

        let back: Member = serde_json::from_value(json).unwrap();
        assert_eq!(back, member);
    }

    #[test]
    fn test_snippet_has_no_name() {
        assert_eq!(Member::snippet("// raw").name(), None);
    }
}
