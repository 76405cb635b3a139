//! Shared emission utilities for the tsdom generator.
//!
//! This crate provides the language-agnostic plumbing the TypeScript emitter
//! is built on.
//!
//! # Module Organization
//!
//! - [`builder`] - Output building blocks (CodeBuilder, Indent, RenderOptions)
//! - [`mapper`] - The type-name mapper contract ([`TypeMapper`])
//! - [`error`] - Emission errors ([`EmitError`])

pub mod builder;
pub mod error;
pub mod mapper;

pub use builder::{CodeBuilder, Indent, RenderOptions, UnsupportedPolicy};
pub use error::{EmitError, Result};
pub use mapper::{NULLABLE_MARKER, TypeMapper, split_nullable};
