//! Client file generator.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tsdom_codegen::RenderOptions;
use tsdom_ir::TypeDeclaration;
use tsdom_manifest::Manifest;

use crate::{ClientClassBuilder, ClientFunctionBuilder, CodeFile, Emitter};

/// Summary of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// The file that was written
    pub path: PathBuf,
    /// Number of client methods generated
    pub operations: usize,
    /// Size of the written file in bytes
    pub bytes: usize,
}

/// Generates a TypeScript client file from an API description.
pub struct Generator<'a> {
    manifest: &'a Manifest,
    emitter: Emitter,
    options: RenderOptions,
}

impl<'a> Generator<'a> {
    pub fn from_manifest(manifest: &'a Manifest) -> Self {
        Self {
            manifest,
            emitter: Emitter::new(),
            options: RenderOptions::default(),
        }
    }

    /// Set the render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the declaration trees of the client file.
    pub fn declarations(&self) -> Result<Vec<TypeDeclaration>> {
        let client = &self.manifest.client;
        let functions =
            ClientFunctionBuilder::with_mapper(*self.emitter.mapper(), client.camel_case);
        let class = ClientClassBuilder::with_functions(&client.name, functions)
            .build(&self.manifest.operations)
            .wrap_err("failed to build client class")?;
        Ok(vec![class])
    }

    /// Render the client file without writing it.
    pub fn preview(&self) -> Result<String> {
        let mut file = CodeFile::new();
        if let Some(header) = &self.manifest.client.header {
            file = file.header(header);
        }

        for decl in self.declarations()? {
            let text = self
                .emitter
                .render_type_declaration(&decl, &self.options)
                .wrap_err_with(|| format!("failed to render '{}'", decl.name))?;
            file = file.add(text);
        }

        Ok(file.render())
    }

    /// Render the client file and write it to `path`.
    pub fn generate(&self, path: &Path) -> Result<GenerateResult> {
        let content = self.preview()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
        }
        std::fs::write(path, &content)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

        tracing::info!(path = %path.display(), bytes = content.len(), "wrote client file");

        Ok(GenerateResult {
            path: path.to_path_buf(),
            operations: self.manifest.operations.len(),
            bytes: content.len(),
        })
    }
}
