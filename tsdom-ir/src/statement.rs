//! Statement trees.

use serde::{Deserialize, Serialize};

use crate::{Expression, TypeReference};

/// A statement node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum Statement {
    /// `left = right`.
    Assign { left: Expression, right: Expression },
    /// Comment text, emitted verbatim including its markers.
    Comment { text: String },
    /// `if (test) { .. }` with an optional else list.
    ///
    /// `else_body: Some(vec![])` and `else_body: None` render differently:
    /// an explicitly empty else still gets its braces.
    Condition {
        test: Expression,
        #[serde(default)]
        then_body: Vec<Statement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_body: Option<Vec<Statement>>,
    },
    /// An expression evaluated for its effect.
    Expression { expr: Expression },
    /// `for (init; test; increment) { .. }`.
    For {
        init: Box<Statement>,
        test: Expression,
        increment: Box<Statement>,
        #[serde(default)]
        body: Vec<Statement>,
    },
    /// `return expr` or a bare `return`.
    Return {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expr: Option<Expression>,
    },
    /// `throw expr`.
    Throw { expr: Expression },
    /// `try { .. } catch (e) { .. } finally { .. }`.
    TryCatchFinally {
        #[serde(default)]
        try_body: Vec<Statement>,
        #[serde(default)]
        catches: Vec<CatchClause>,
        #[serde(default)]
        finally_body: Vec<Statement>,
    },
    /// `Type name = init`.
    VariableDeclaration {
        #[serde(rename = "type")]
        ty: TypeReference,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Expression>,
    },
    /// Raw statement text, emitted line by line at the block indentation.
    Snippet { text: String },
    /// A known statement form that has no TypeScript rendering.
    Unsupported { form: UnsupportedStatement },
}

impl Statement {
    /// Create an assignment.
    pub fn assign(left: Expression, right: Expression) -> Self {
        Self::Assign { left, right }
    }

    /// Create a comment statement.
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment { text: text.into() }
    }

    /// Create an if statement without an else branch.
    pub fn if_(test: Expression, then_body: Vec<Statement>) -> Self {
        Self::Condition {
            test,
            then_body,
            else_body: None,
        }
    }

    /// Create an if-else statement.
    pub fn if_else(test: Expression, then_body: Vec<Statement>, else_body: Vec<Statement>) -> Self {
        Self::Condition {
            test,
            then_body,
            else_body: Some(else_body),
        }
    }

    /// Create an expression statement.
    pub fn expr(expr: Expression) -> Self {
        Self::Expression { expr }
    }

    /// Create a for loop.
    pub fn for_(
        init: Statement,
        test: Expression,
        increment: Statement,
        body: Vec<Statement>,
    ) -> Self {
        Self::For {
            init: Box::new(init),
            test,
            increment: Box::new(increment),
            body,
        }
    }

    /// Create a return statement.
    pub fn return_(expr: Expression) -> Self {
        Self::Return { expr: Some(expr) }
    }

    /// Create a bare return statement.
    pub fn return_void() -> Self {
        Self::Return { expr: None }
    }

    /// Create a throw statement.
    pub fn throw(expr: Expression) -> Self {
        Self::Throw { expr }
    }

    /// Create a try/catch/finally statement.
    pub fn try_catch_finally(
        try_body: Vec<Statement>,
        catches: Vec<CatchClause>,
        finally_body: Vec<Statement>,
    ) -> Self {
        Self::TryCatchFinally {
            try_body,
            catches,
            finally_body,
        }
    }

    /// Create a variable declaration.
    pub fn declare(ty: TypeReference, name: impl Into<String>, init: Option<Expression>) -> Self {
        Self::VariableDeclaration {
            ty,
            name: name.into(),
            init,
        }
    }

    /// Create a raw snippet statement.
    pub fn snippet(text: impl Into<String>) -> Self {
        Self::Snippet { text: text.into() }
    }

    /// Create an unsupported statement placeholder.
    pub fn unsupported(form: UnsupportedStatement) -> Self {
        Self::Unsupported { form }
    }
}

/// A catch clause. The caught value is always an untyped binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchClause {
    pub local_name: String,
    #[serde(default)]
    pub body: Vec<Statement>,
}

impl CatchClause {
    pub fn new(local_name: impl Into<String>, body: Vec<Statement>) -> Self {
        Self {
            local_name: local_name.into(),
            body,
        }
    }
}

/// Statement forms the emitter knows about but does not render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedStatement {
    AttachEvent,
    RemoveEvent,
    Goto,
    Labeled,
}

impl UnsupportedStatement {
    /// Get a human-readable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AttachEvent => "attach event",
            Self::RemoveEvent => "remove event",
            Self::Goto => "goto",
            Self::Labeled => "labeled statement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_else_presence() {
        let without = Statement::if_(Expression::variable("ok"), vec![]);
        let with_empty = Statement::if_else(Expression::variable("ok"), vec![], vec![]);

        assert!(matches!(without, Statement::Condition { else_body: None, .. }));
        assert!(matches!(
            with_empty,
            Statement::Condition {
                else_body: Some(ref body),
                ..
            } if body.is_empty()
        ));
    }

    #[test]
    fn test_else_presence_survives_json() {
        let with_empty = Statement::if_else(Expression::variable("ok"), vec![], vec![]);
        let json = serde_json::to_string(&with_empty).unwrap();
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_empty);

        let without = Statement::if_(Expression::variable("ok"), vec![]);
        let json = serde_json::to_string(&without).unwrap();
        assert!(!json.contains("else_body"));
    }

    #[test]
    fn test_return_void() {
        assert_eq!(Statement::return_void(), Statement::Return { expr: None });
    }
}
