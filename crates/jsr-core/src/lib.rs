//! # jsr-core
//!
//! Core types and utilities shared across all jsr-rs crates.
//!
//! This crate provides:
//! - `JsrError` for unified error handling
//! - `Protocol` and `PackageRef` value types used by clients and the CLI
//! - Path helpers for classifying package manifest entries
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Protocol, PackageRef)
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{ErrorKind, JsrError, JsrResult};
pub use types::{PackageRef, Protocol};
