//! Expressions.

use tsdom_codegen::{RenderOptions, Result, TypeMapper};
use tsdom_ir::{Expression, Literal};

use super::Emitter;

impl<M: TypeMapper> Emitter<M> {
    /// Render an expression. Expressions never carry a terminator.
    pub fn render_expression(&self, expr: &Expression, opts: &RenderOptions) -> Result<String> {
        let text = match expr {
            Expression::ArgumentRef { name } | Expression::VariableRef { name } => name.clone(),
            Expression::FieldRef { target, field_name } => {
                format!("{}.{}", self.render_expression(target, opts)?, field_name)
            }
            Expression::PropertyRef {
                target,
                property_name,
            } => format!("{}.{}", self.render_expression(target, opts)?, property_name),
            Expression::MethodInvoke {
                target,
                method_name,
                args,
            } => format!(
                "{}.{}({})",
                self.render_expression(target, opts)?,
                method_name,
                self.render_arguments(args, opts)?
            ),
            Expression::MethodRef {
                target,
                method_name,
                type_args,
            } => {
                let type_args: Vec<String> =
                    type_args.iter().map(|ty| self.mapper.render_type(ty)).collect();
                format!(
                    "{}.{}({})",
                    self.render_expression(target, opts)?,
                    method_name,
                    type_args.join(", ")
                )
            }
            Expression::ObjectCreate { ty, args } => format!(
                "new {}({})",
                self.mapper.render_type(ty),
                self.render_arguments(args, opts)?
            ),
            Expression::ParameterDecl { name, ty } => {
                format!("{}: {}", name, self.mapper.render_type(ty))
            }
            Expression::Primitive { value } => render_literal(value),
            Expression::Snippet { text } => text.clone(),
            Expression::This => "this".to_string(),
            Expression::TypeRef { ty } => self.mapper.render_type(ty),
            Expression::Unsupported { form } => {
                self.unsupported(form.as_str(), opts)?;
                String::new()
            }
        };
        Ok(text)
    }

    fn render_arguments(&self, args: &[Expression], opts: &RenderOptions) -> Result<String> {
        let args = args
            .iter()
            .map(|arg| self.render_expression(arg, opts))
            .collect::<Result<Vec<_>>>()?;
        Ok(args.join(", "))
    }
}

/// Render a literal token.
///
/// Strings are double-quoted with backslashes, quotes and line breaks
/// escaped, so the token stays a valid TypeScript string.
fn render_literal(value: &Literal) -> String {
    match value {
        Literal::String(s) => {
            let mut out = String::with_capacity(s.len() + 2);
            out.push('"');
            for c in s.chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    c => out.push(c),
                }
            }
            out.push('"');
            out
        }
        other => other.to_string(),
    }
}
