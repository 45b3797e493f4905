//! Utility functions and helpers.
//!
//! Common functionality used across multiple jsr-rs crates.

pub mod path;

// Re-export commonly used utilities
pub use path::{is_hidden_path, is_hidden_segment, last_segment};
