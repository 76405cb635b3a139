//! Declaration tree types for the tsdom TypeScript emitter.
//!
//! This crate provides the language-agnostic program representation that the
//! emitter walks: type declarations, their members, and the statement and
//! expression trees of method bodies.
//!
//! # Architecture
//!
//! ```text
//! tsdom.toml (TOML) → tsdom-manifest (parsing) → skeleton builder → tsdom-ir (tree) → emitter
//! ```
//!
//! The tree types are designed to be:
//! - Immutable once built (the emitter never mutates them)
//! - Exclusively owned (no sharing, no cycles)
//! - Serializable, so a tree can be stored as JSON and rendered later

mod declaration;
mod expression;
mod statement;
mod types;

pub use declaration::{Member, Method, Parameter, TypeDeclaration, TypeKind, Visibility};
pub use expression::{Expression, Literal, UnsupportedExpression};
pub use statement::{CatchClause, Statement, UnsupportedStatement};
pub use types::{TypeParameter, TypeReference};
