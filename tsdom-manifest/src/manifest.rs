//! API description schema and parsing.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use tsdom_ir::TypeReference;

use crate::{Error, Result, SourceContext, validate};

/// Root schema for tsdom.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Client class configuration
    pub client: ClientConfig,

    /// API operations, in declaration order
    #[serde(default)]
    pub operations: Vec<ApiOperation>,
}

/// The `[client]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Name of the generated client class
    pub name: String,

    /// Lower-case the first character of method names
    #[serde(default = "default_camel_case")]
    pub camel_case: bool,

    /// Optional header comment for the generated file
    #[serde(default)]
    pub header: Option<String>,
}

fn default_camel_case() -> bool {
    true
}

/// One HTTP operation of the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiOperation {
    /// Server-side action name (e.g. "GetAsync")
    pub name: String,

    /// HTTP verb
    pub method: HttpMethod,

    /// Relative URI template (e.g. "api/Values/{id}?name={name}")
    pub path: String,

    #[serde(default)]
    pub documentation: Option<String>,

    /// Response type; absent for operations returning nothing
    #[serde(default)]
    pub response: Option<TypeReference>,

    #[serde(default)]
    pub response_documentation: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ApiParameter>,
}

impl ApiOperation {
    /// Find a parameter by name, ignoring ASCII case.
    pub fn parameter(&self, name: &str) -> Option<&ApiParameter> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The parameter sent as the request body, if any.
    pub fn body_parameter(&self) -> Option<&ApiParameter> {
        self.parameters.iter().find(|p| p.from_body)
    }
}

/// A parameter of an API operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiParameter {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeReference,

    #[serde(default)]
    pub documentation: Option<String>,

    /// Sent as the request body instead of through the URI
    #[serde(default)]
    pub from_body: bool,
}

/// HTTP verbs an operation may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// Get the uppercase verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }

    /// Whether the verb carries a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "tsdom.toml")
    }
}

impl Manifest {
    /// Parse a tsdom.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse and validate a manifest.
pub(crate) fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate::validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}
