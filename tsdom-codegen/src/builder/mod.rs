//! Output building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for assembling indented files
//! - [`Indent`] - Indentation unit configuration
//! - [`RenderOptions`] - Immutable indentation cursor passed down a render
//! - [`UnsupportedPolicy`] - What to do with nodes that have no rendering

mod code_builder;
mod indent;
mod options;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use options::{RenderOptions, UnsupportedPolicy};
