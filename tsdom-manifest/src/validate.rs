//! Semantic validation run after a manifest is deserialized.

use std::collections::HashSet;

use crate::{Manifest, Result, SourceContext, UriTemplate};

/// TypeScript/JavaScript reserved words that cannot name a class or method.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
];

pub(crate) fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    validate_name(&manifest.client.name, "client", ctx)?;

    let mut seen = HashSet::new();
    for operation in &manifest.operations {
        validate_name(&operation.name, "operation", ctx)?;
        if !seen.insert(operation.name.as_str()) {
            return Err(ctx.duplicate_operation_error(&operation.name));
        }

        let mut params = HashSet::new();
        for param in &operation.parameters {
            validate_name(&param.name, "parameter", ctx)?;
            if !params.insert(param.name.to_ascii_lowercase()) {
                return Err(ctx.validation_error(
                    format!(
                        "operation '{}' declares parameter '{}' more than once",
                        operation.name, param.name
                    ),
                    Some(&param.name),
                ));
            }
        }

        if operation.parameters.iter().filter(|p| p.from_body).count() > 1 {
            return Err(ctx.validation_error(
                format!(
                    "operation '{}' has more than one body parameter",
                    operation.name
                ),
                Some(&operation.name),
            ));
        }

        let template = UriTemplate::parse(&operation.path);
        for variable in template.variables() {
            if operation.parameter(variable).is_none() {
                return Err(ctx.unknown_uri_variable_error(
                    &operation.name,
                    &operation.path,
                    variable,
                ));
            }
        }
    }

    Ok(())
}

fn validate_name(name: &str, context: &str, ctx: &SourceContext) -> Result<()> {
    if let Some(reason) = identifier_problem(name) {
        return Err(ctx.invalid_identifier_error(name, context, reason));
    }
    Ok(())
}

/// Check that a name is a usable TypeScript identifier.
///
/// Returns the reason when it is not.
pub(crate) fn identifier_problem(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name cannot start with a digit"),
        Some(c) if !is_identifier_char(c) => return Some("name contains an invalid character"),
        Some(_) => {}
    }

    if !chars.all(is_identifier_char) {
        return Some("name contains an invalid character");
    }

    if RESERVED_WORDS.contains(&name) {
        return Some("name is a reserved word");
    }

    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
