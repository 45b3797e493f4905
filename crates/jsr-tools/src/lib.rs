//! Query helpers for jsr-rs
//!
//! Pure functions over documents already fetched with `jsr-registry`. None of
//! them perform I/O or fail: an empty input yields an empty output of the same
//! shape.
//!
//! - `versions`: yanked and unyanked versions of a package
//! - `dependencies`: imports and exports of a module, by static/dynamic type
//! - `manifest`: hidden and visible files, well-known config files

pub mod dependencies;
pub mod manifest;
pub mod versions;

// Re-export main helpers
pub use dependencies::{
    dynamic_exports, dynamic_imports, exports, imports, static_exports, static_imports,
    DependencyFilter,
};
pub use manifest::{
    config_files, has_bunfig_toml, has_deno_json, has_file, has_jsr_json, has_package_json,
    hidden_entries, visible_entries, ConfigFile,
};
pub use versions::{partition_versions, unyanked_versions, yanked_versions};
