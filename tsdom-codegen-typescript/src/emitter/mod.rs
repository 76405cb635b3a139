//! Tree-to-text TypeScript emitter.
//!
//! Every render method takes the node plus an immutable [`RenderOptions`] and
//! returns the text for that node. Nested scopes render with
//! [`RenderOptions::nested`], so indentation can never leak between siblings.
//!
//! Types are turned into text only through the emitter's [`TypeMapper`].

mod declaration;
mod expression;
mod statement;

use std::fmt;

use tsdom_codegen::{EmitError, RenderOptions, Result, TypeMapper, UnsupportedPolicy};
use tsdom_ir::TypeDeclaration;

use crate::TypeScriptTypeMapper;

/// Renders declaration trees as TypeScript source text.
#[derive(Debug, Clone, Default)]
pub struct Emitter<M = TypeScriptTypeMapper> {
    mapper: M,
}

impl Emitter {
    /// Create an emitter with the TypeScript type mapper.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: TypeMapper> Emitter<M> {
    /// Create an emitter with a custom type mapper.
    pub fn with_mapper(mapper: M) -> Self {
        Self { mapper }
    }

    /// Get the type mapper.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Render a type declaration into a text sink.
    ///
    /// Nothing is written when rendering fails.
    pub fn write_type_declaration<W: fmt::Write>(
        &self,
        decl: &TypeDeclaration,
        out: &mut W,
        opts: &RenderOptions,
    ) -> Result<()> {
        let text = self.render_type_declaration(decl, opts)?;
        out.write_str(&text)?;
        Ok(())
    }

    /// Apply the unsupported-node policy to a node with no rendering.
    fn unsupported(&self, node: &'static str, opts: &RenderOptions) -> Result<()> {
        match opts.unsupported {
            UnsupportedPolicy::Omit => {
                tracing::debug!(node, "omitting node with no TypeScript rendering");
                Ok(())
            }
            UnsupportedPolicy::Reject => Err(EmitError::Unsupported { node }),
        }
    }
}
