//! Core data types for jsr-rs.
//!
//! - Transport protocol selection
//! - Package references in `@scope/name[@version]` form

pub mod package_ref;
pub mod protocol;

// Re-export all public types
pub use package_ref::PackageRef;
pub use protocol::Protocol;
