use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The manifest text and its filename, kept around so every diagnostic can
/// point back into the file.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Source code attached to diagnostics.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Locate the first quoted occurrence of `value` in the source.
    pub fn find_quoted(&self, value: &str) -> Option<SourceSpan> {
        self.find_quoted_from(value, 0)
    }

    /// Locate the first quoted occurrence of `value` at or after `offset`.
    pub fn find_quoted_from(&self, value: &str, offset: usize) -> Option<SourceSpan> {
        let needle = format!("\"{}\"", value);
        let rest = self.src.get(offset..)?;
        rest.find(&needle)
            .map(|pos| SourceSpan::from((offset + pos + 1, value.len())))
    }

    /// Wrap a toml deserialization error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` when it can be found.
    pub fn validation_error(&self, message: impl Into<String>, needle: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: needle.and_then(|n| self.find_quoted(n)),
            message: message.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: self.find_quoted(&name),
            name,
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate operation error.
    pub fn duplicate_operation_error(&self, name: impl Into<String>) -> Box<Error> {
        let name = name.into();
        let first_span = self.find_quoted(&name);
        let second_span = first_span.and_then(|first| {
            self.find_quoted_from(&name, first.offset() + first.len())
        });
        Box::new(Error::DuplicateOperation {
            src: self.named_source(),
            first_span,
            second_span,
            name,
        })
    }

    /// Create an unknown URI variable error.
    pub fn unknown_uri_variable_error(
        &self,
        operation: impl Into<String>,
        path: &str,
        variable: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::UnknownUriVariable {
            src: self.named_source(),
            span: self.find_quoted(path),
            operation: operation.into(),
            variable: variable.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a tsdom.toml describing the API operations"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse API description")]
    #[diagnostic(code(tsdom::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tsdom::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(tsdom::invalid_identifier),
        help("{reason}. Use only letters, digits, '_' and '$', not starting with a digit.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("duplicate operation '{name}'")]
    #[diagnostic(
        code(tsdom::duplicate_operation),
        help("every operation becomes a method of the client class, so names must be unique")
    )]
    DuplicateOperation {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: Option<SourceSpan>,
        #[label("defined again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("operation '{operation}' uses URI variable '{variable}' which is not a parameter")]
    #[diagnostic(
        code(tsdom::unknown_uri_variable),
        help("add a parameter named '{variable}' to the operation")
    )]
    UnknownUriVariable {
        #[source_code]
        src: NamedSource<String>,
        #[label("in this path")]
        span: Option<SourceSpan>,
        operation: String,
        variable: String,
    },
}
