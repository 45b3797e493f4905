//! JSR registry client for jsr-rs
//!
//! This crate provides the HTTP client that fetches package metadata
//! (`/@scope/name/meta.json`) and per-version package descriptors
//! (`/@scope/name/version_meta.json`) from a JSR registry, along with the
//! typed response model those documents deserialize into.

pub mod api;
pub mod client;

// Re-export main types
pub use api::{
    Dependency, DependencyKind, DependencyType, FileEntry, Manifest, ModuleGraph, ModuleInfo,
    Package, PackageMeta, SpecifierRange, VersionInfo, Versions,
};
pub use client::{ClientConfig, ClientOptions, Middleware, RegistryClient, DEFAULT_HOSTNAME};

use jsr_core::error::JsrError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, JsrError>;
