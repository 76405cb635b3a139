//! TypeScript emitter and Web API client generator for tsdom.
//!
//! The [`Emitter`] renders `tsdom-ir` declaration trees as TypeScript text.
//! On top of it, the client builders turn a `tsdom.toml` API description into
//! a client class and the [`Generator`] writes it out as a single file.
//!
//! # Usage
//!
//! ```ignore
//! use tsdom_codegen_typescript::Generator;
//! use tsdom_manifest::ManifestFile;
//! use std::path::Path;
//!
//! let file = ManifestFile::open("tsdom.toml")?;
//! let generator = Generator::from_manifest(file.manifest());
//!
//! // Preview the file without writing
//! let text = generator.preview()?;
//!
//! // Write the file to disk
//! let result = generator.generate(Path::new("src/client.ts"))?;
//! ```
//!
//! Rendering a tree directly:
//!
//! ```
//! use tsdom_codegen::RenderOptions;
//! use tsdom_codegen_typescript::Emitter;
//! use tsdom_ir::{Member, TypeDeclaration, TypeReference};
//!
//! let hero = TypeDeclaration::interface("Hero")
//!     .member(Member::property("name", TypeReference::string().nullable()));
//!
//! let text = Emitter::new()
//!     .render_type_declaration(&hero, &RenderOptions::default())
//!     .unwrap();
//! assert_eq!(text, "export interface Hero {\n    name?: string;\n}\n");
//! ```

mod client;
mod code_file;
mod emitter;
mod generator;
mod naming;
mod type_mapper;

pub use client::{ClientClassBuilder, ClientError, ClientFunctionBuilder};
pub use code_file::CodeFile;
pub use emitter::Emitter;
pub use generator::{GenerateResult, Generator};
pub use naming::{client_method_name, to_camel_case};
pub use type_mapper::TypeScriptTypeMapper;
