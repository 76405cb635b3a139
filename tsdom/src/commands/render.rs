use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use serde::Deserialize;
use tsdom_codegen::RenderOptions;
use tsdom_codegen_typescript::{CodeFile, Emitter};
use tsdom_ir::TypeDeclaration;

#[derive(Args)]
pub struct RenderCommand {
    /// JSON file holding one declaration or an array of declarations
    pub tree: PathBuf,

    /// Fail on nodes that have no TypeScript rendering instead of omitting them
    #[arg(long)]
    pub strict: bool,
}

/// A single declaration or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Tree {
    One(Box<TypeDeclaration>),
    Many(Vec<TypeDeclaration>),
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let json = std::fs::read_to_string(&self.tree)
            .wrap_err_with(|| format!("Failed to read '{}'", self.tree.display()))?;
        let opts = if self.strict {
            RenderOptions::strict()
        } else {
            RenderOptions::default()
        };
        print!("{}", render_json(&json, &opts)?);
        Ok(())
    }
}

fn render_json(json: &str, opts: &RenderOptions) -> Result<String> {
    let decls = match serde_json::from_str(json).wrap_err("Invalid declaration tree")? {
        Tree::One(decl) => vec![*decl],
        Tree::Many(decls) => decls,
    };

    let emitter = Emitter::new();
    let mut file = CodeFile::new();
    for decl in &decls {
        let text = emitter
            .render_type_declaration(decl, opts)
            .wrap_err_with(|| format!("Failed to render '{}'", decl.name))?;
        file = file.add(text);
    }

    Ok(file.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_declaration() {
        let json = r#"{"kind": "interface", "name": "Named", "members": [
            {"member": "property", "name": "name", "type": {"name": "string", "nullable": true}}
        ]}"#;
        let text = render_json(json, &RenderOptions::default()).unwrap();
        assert_eq!(text, "export interface Named {\n    name?: string;\n}\n");
    }

    #[test]
    fn test_render_declaration_list() {
        let json = r#"[
            {"kind": "enum", "name": "Color", "members": [
                {"member": "field", "name": "Red", "type": {"name": "int"}},
                {"member": "field", "name": "Blue", "type": {"name": "int"},
                 "init": {"expr": "primitive", "value": 4}}
            ]},
            {"kind": "class", "name": "Empty", "visibility": "private"}
        ]"#;
        let text = render_json(json, &RenderOptions::default()).unwrap();
        assert_eq!(text, "export enum Color {Red, Blue=4}\n\nclass Empty {\n}\n");
    }

    #[test]
    fn test_strict_rejects_unsupported() {
        let json = r#"{"kind": "class", "name": "C", "members": [
            {"member": "method", "name": "f", "body": [{"stmt": "unsupported", "form": "goto"}]}
        ]}"#;
        assert!(render_json(json, &RenderOptions::default()).is_ok());

        let err = render_json(json, &RenderOptions::strict()).unwrap_err();
        assert_eq!(err.to_string(), "Failed to render 'C'");
    }

    #[test]
    fn test_invalid_json() {
        let err = render_json("{", &RenderOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid declaration tree");
    }
}
