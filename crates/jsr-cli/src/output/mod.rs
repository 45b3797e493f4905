//! Terminal output formatting and utilities.
//!
//! Query results are written to stdout as pretty JSON so they can be piped;
//! human-facing status lines go to stderr.

pub mod colors;
pub mod errors;

use std::io::{self, Write};

use jsr_core::error::{JsrError, JsrResult};
use serde::Serialize;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print a warning message
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", self.colors.yellow("⚠"), message);
    }

    /// Print an error with its cause chain and suggestion
    pub fn error(&self, error: &JsrError) {
        eprint!("{}", errors::ErrorFormatter::new().format_error(error));
    }

    /// Write `value` to stdout as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> JsrResult<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, value)
            .map_err(|e| JsrError::io("Failed to write output".to_string(), e.into()))?;
        writeln!(handle).map_err(|e| JsrError::io("Failed to write output".to_string(), e))
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
