//! Statements and statement blocks.

use tsdom_codegen::{RenderOptions, Result, TypeMapper};
use tsdom_ir::{CatchClause, Statement};

use super::Emitter;

impl<M: TypeMapper> Emitter<M> {
    /// Render a statement list one indentation unit deeper than `opts`.
    ///
    /// Every statement ends with `;` and a newline, except snippets, which are
    /// written line by line after a blank line.
    pub fn render_statement_block(
        &self,
        stmts: &[Statement],
        opts: &RenderOptions,
    ) -> Result<String> {
        let inner = opts.nested();
        let indent = inner.indent_str();
        let mut out = String::new();

        for stmt in stmts {
            match stmt {
                Statement::Snippet { text } => {
                    out.push('\n');
                    let lines: Vec<String> =
                        text.lines().map(|line| format!("{}{}", indent, line)).collect();
                    out.push_str(&lines.join("\n"));
                    out.push('\n');
                }
                Statement::Unsupported { form } => {
                    self.unsupported(form.as_str(), &inner)?;
                }
                _ => {
                    if matches!(stmt, Statement::TryCatchFinally { .. }) {
                        out.push('\n');
                    }
                    out.push_str(&indent);
                    out.push_str(&self.render_statement(stmt, &inner)?);
                    out.push_str(";\n");
                }
            }
        }

        Ok(out)
    }

    /// Render a single statement without its terminator.
    ///
    /// `opts` is the depth the statement itself sits at; nested blocks are
    /// rendered one unit deeper and closed at this depth.
    pub fn render_statement(&self, stmt: &Statement, opts: &RenderOptions) -> Result<String> {
        let text = match stmt {
            Statement::Assign { left, right } => format!(
                "{} = {}",
                self.render_expression(left, opts)?,
                self.render_expression(right, opts)?
            ),
            Statement::Comment { text } => text.clone(),
            Statement::Condition {
                test,
                then_body,
                else_body,
            } => {
                let indent = opts.indent_str();
                let mut out = format!(
                    "if ({}){{\n{}{}}}",
                    self.render_expression(test, opts)?,
                    self.render_statement_block(then_body, opts)?,
                    indent
                );
                // The alternative branch is a bare brace pair on its own line.
                if let Some(else_body) = else_body {
                    out.push_str(&format!(
                        "\n{}{{\n{}{}}}",
                        indent,
                        self.render_statement_block(else_body, opts)?,
                        indent
                    ));
                }
                out
            }
            Statement::Expression { expr } => self.render_expression(expr, opts)?,
            Statement::For {
                init,
                test,
                increment,
                body,
            } => format!(
                "for ({}; {}; {}){{\n{}{}}}",
                self.render_statement(init, opts)?,
                self.render_expression(test, opts)?,
                self.render_statement(increment, opts)?,
                self.render_statement_block(body, opts)?,
                opts.indent_str()
            ),
            Statement::Return { expr: Some(expr) } => {
                format!("return {}", self.render_expression(expr, opts)?)
            }
            Statement::Return { expr: None } => "return".to_string(),
            Statement::Throw { expr } => format!("throw {}", self.render_expression(expr, opts)?),
            Statement::TryCatchFinally {
                try_body,
                catches,
                finally_body,
            } => self.render_try(try_body, catches, finally_body, opts)?,
            Statement::VariableDeclaration { ty, name, init } => {
                let mut out = format!("{} {}", self.mapper.render_type(ty), name);
                if let Some(init) = init {
                    out.push_str(" = ");
                    out.push_str(&self.render_expression(init, opts)?);
                }
                out
            }
            Statement::Snippet { text } => text.clone(),
            Statement::Unsupported { form } => {
                self.unsupported(form.as_str(), opts)?;
                String::new()
            }
        };
        Ok(text)
    }

    fn render_try(
        &self,
        try_body: &[Statement],
        catches: &[CatchClause],
        finally_body: &[Statement],
        opts: &RenderOptions,
    ) -> Result<String> {
        let indent = opts.indent_str();
        let mut out = format!(
            "try {{\n{}{}}}",
            self.render_statement_block(try_body, opts)?,
            indent
        );

        for catch in catches {
            out.push_str(&format!(
                "\n{}catch ({}) {{\n{}{}}}",
                indent,
                catch.local_name,
                self.render_statement_block(&catch.body, opts)?,
                indent
            ));
        }

        if !finally_body.is_empty() {
            out.push_str(&format!(
                "\n{}finally {{\n{}{}}}",
                indent,
                self.render_statement_block(finally_body, opts)?,
                indent
            ));
        }

        Ok(out)
    }
}
