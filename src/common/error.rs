use crate::estree::LocalizedValidationError;

use super::terminal::{BOLD, DEFAULT_COLOR, DIM, RED, RESET};

/// Formats a single validation error for a terminal, optionally with color.
pub struct ErrorFormatter<'a> {
    /// Type of this error (e.g. ValidationError)
    kind: &'a str,
    error: &'a LocalizedValidationError,
    use_color: bool,
    /// The error message builder
    builder: String,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new_for_validation_error(
        error: &'a LocalizedValidationError,
        opts: &FormatOptions,
    ) -> Self {
        Self { kind: "ValidationError", error, use_color: opts.use_color, builder: String::new() }
    }

    /// Push an escape code, only when writing with color.
    fn style(&mut self, code: &str) {
        if self.use_color {
            self.builder.push_str(code);
        }
    }

    /// Text of the form:
    ///
    /// ValidationError: <message>
    ///   ┌ <file>:<line>:<col>
    ///   | <offending node>
    pub fn build(mut self) -> String {
        // Kind is in bold and red, message in bold and default color
        self.style(BOLD);
        self.style(RED);
        self.builder.push_str(self.kind);
        self.style(DEFAULT_COLOR);
        self.builder.push_str(": ");
        self.builder.push_str(&self.error.message);
        self.style(RESET);
        self.builder.push('\n');

        self.style(DIM);
        self.builder.push_str("  ┌ ");
        self.style(RESET);
        self.builder.push_str(&self.error.file_path);
        if let Some((line, col)) = self.error.line_col {
            self.builder.push_str(&format!(":{}:{}", line, col));
        }
        self.builder.push('\n');

        self.style(DIM);
        self.builder.push_str("  | ");
        self.style(RESET);
        self.builder.push_str(&self.error.snippet);

        self.builder
    }
}

#[derive(Default)]
pub struct FormatOptions {
    // Whether to use color in the output
    pub use_color: bool,
}

impl FormatOptions {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}
