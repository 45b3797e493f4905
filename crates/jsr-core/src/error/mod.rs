//! Error types and result aliases for jsr-rs operations.
//!
//! Every fallible operation in the workspace returns [`JsrResult`]. The
//! variants are fine-grained for diagnostics, while [`JsrError::kind`] folds
//! them into the three classes callers usually branch on.

use thiserror::Error;

/// Unified error type for all jsr-rs operations
#[derive(Error, Debug)]
pub enum JsrError {
    // Construction errors
    #[error("Client configuration field '{field}' is invalid: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Argument '{field}' is invalid: {reason}")]
    InvalidArgument { field: String, reason: String },

    // Request errors
    #[error("Request to {url} failed: {message}")]
    Request {
        url: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Registry returned status {status} for {url}")]
    HttpStatus {
        url: String,
        status: u16,
        body: String,
    },

    // Response errors
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        url: String,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // Config file errors
    #[error("Failed to parse {path}: {message} at line {line}, column {column}")]
    ConfigParse {
        path: String,
        message: String,
        line: usize,
        column: usize,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`JsrError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input detected before any request was sent
    InvalidConfig,
    /// Transport failure or non-success HTTP status
    Request,
    /// Response body was not the expected JSON document
    Decode,
}

/// Result type alias for jsr-rs operations
pub type JsrResult<T> = Result<T, JsrError>;

impl JsrError {
    /// Create an invalid configuration error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a request error from any transport error
    pub fn request<E>(url: impl Into<String>, message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Request {
            url: url.into(),
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            JsrError::Request { .. } | JsrError::HttpStatus { .. } => ErrorKind::Request,
            JsrError::Decode { .. } => ErrorKind::Decode,
            JsrError::InvalidConfig { .. }
            | JsrError::InvalidArgument { .. }
            | JsrError::ConfigParse { .. }
            | JsrError::Io { .. } => ErrorKind::InvalidConfig,
        }
    }

    /// HTTP status code, if the registry answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            JsrError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a non-success answer
    pub fn body(&self) -> Option<&str> {
        match self {
            JsrError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            JsrError::InvalidConfig { .. } => {
                Some("Hostnames look like 'jsr.io' or 'localhost:8080', without a scheme")
            },
            JsrError::HttpStatus { status: 404, .. } => {
                Some("Check the package scope, name and version spelling")
            },
            JsrError::Request { .. } => Some("Check your internet connection and try again"),
            JsrError::Decode { .. } => {
                Some("The host may not be a JSR registry; check the configured hostname")
            },
            JsrError::ConfigParse { .. } => Some("Fix the syntax error in jsr.toml"),
            _ => None,
        }
    }
}
