//! CodeFile abstraction for assembling a generated TypeScript file.

use tsdom_codegen::{CodeBuilder, Indent};

/// A generated TypeScript file: an optional header comment followed by
/// pre-rendered declarations.
///
/// Declarations are separated by one blank line.
///
/// # Example
///
/// ```
/// use tsdom_codegen_typescript::CodeFile;
///
/// let text = CodeFile::new()
///     .header("Generated code")
///     .add("export class A {\n}\n")
///     .render();
///
/// assert_eq!(text, "// Generated code\n\nexport class A {\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeFile {
    header: Option<String>,
    body: Vec<String>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment. Each line becomes a `//` comment.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    /// Add a rendered declaration.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, code: impl Into<String>) -> Self {
        self.body.push(code.into());
        self
    }

    /// Add multiple rendered declarations.
    pub fn add_all(mut self, code: impl IntoIterator<Item = String>) -> Self {
        self.body.extend(code);
        self
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::STANDARD);

        if let Some(header) = &self.header {
            for line in header.lines() {
                builder.push_comment(line);
            }
            if !self.body.is_empty() {
                builder.push_blank();
            }
        }

        for (i, code) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.push_raw(code);
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.body.is_empty()
    }
}
