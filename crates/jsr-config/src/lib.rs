//! Configuration parsing for jsr-rs
//!
//! This crate handles parsing and validation of `jsr.toml` files and layers
//! them with the global config, environment variables and command-line flags
//! into the registry settings a client is built from.

pub mod merge;
pub mod toml;

// Re-export main types
pub use merge::{ConfigLayering, ConfigLoader, ConfigSource};
pub use crate::toml::{parse_jsr_toml, JsrToml, RegistrySection};

use jsr_core::error::JsrError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, JsrError>;
