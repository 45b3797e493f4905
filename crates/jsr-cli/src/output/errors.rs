//! Error message formatting with actionable suggestions.

use std::error::Error;

use jsr_core::error::JsrError;

use super::colors::ColorSupport;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Formatter that never emits color codes
    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            colors: ColorSupport::disabled(),
        }
    }

    /// Format an error with context and suggestions
    pub fn format_error(&self, error: &JsrError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        // Registry error pages are often HTML; only short bodies are useful
        if let Some(body) = error.body() {
            let body = body.trim();
            if !body.is_empty() && body.len() <= 200 {
                output.push_str(&self.colors.dim("response"));
                output.push_str(": ");
                output.push_str(body);
                output.push('\n');
            }
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            output.push('\n');
            source = err.source();
        }

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_error() {
        let error = JsrError::HttpStatus {
            url: "https://jsr.io/@dunno/missing/meta.json".to_string(),
            status: 404,
            body: "Not Found".to_string(),
        };
        let formatted = ErrorFormatter::plain().format_error(&error);

        assert!(formatted.starts_with(
            "error: Registry returned status 404 for https://jsr.io/@dunno/missing/meta.json\n"
        ));
        assert!(formatted.contains("response: Not Found\n"));
        assert!(formatted.contains("help: Check the package scope"));
    }

    #[test]
    fn test_format_includes_cause_chain() {
        let error = JsrError::io(
            "Failed to read jsr.toml".to_string(),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let formatted = ErrorFormatter::plain().format_error(&error);
        assert!(formatted.contains("caused by: no such file"));
    }
}
