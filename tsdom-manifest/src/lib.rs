//! API description parsing and validation for the tsdom generator.
//!
//! A `tsdom.toml` file describes the Web API a TypeScript client is generated
//! for: the client class name and one entry per HTTP operation.
//!
//! ```toml
//! [client]
//! name = "ValuesClient"
//!
//! [[operations]]
//! name = "GetAsync"
//! method = "GET"
//! path = "api/Values/{id}"
//! response = { name = "string", nullable = true }
//! parameters = [{ name = "id", type = { name = "int" } }]
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod uri;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::ManifestFile;
pub use manifest::{ApiOperation, ApiParameter, ClientConfig, HttpMethod, Manifest};
pub use uri::{UriPart, UriTemplate};
