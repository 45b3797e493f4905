//! JSR registry API response types and endpoint paths

use serde::{Deserialize, Deserializer};

mod meta;
mod package;

pub use meta::{PackageMeta, VersionInfo, Versions};
pub use package::{
    Dependency, DependencyKind, DependencyType, FileEntry, Manifest, ModuleGraph, ModuleInfo,
    Package, SpecifierRange,
};

/// Read `null` the same way as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unencoded path segments of the package metadata document
pub fn meta_segments(scope: &str, name: &str) -> [String; 3] {
    [format!("@{}", scope), name.to_string(), "meta.json".to_string()]
}

/// Unencoded path segments of a version's descriptor
pub fn package_segments(scope: &str, name: &str, version: &str) -> [String; 3] {
    [
        format!("@{}", scope),
        name.to_string(),
        format!("{}_meta.json", version),
    ]
}

/// Path of the package metadata document: `/@{scope}/{name}/meta.json`
pub fn meta_path(scope: &str, name: &str) -> String {
    format!("/{}", meta_segments(scope, name).join("/"))
}

/// Path of a version's descriptor: `/@{scope}/{name}/{version}_meta.json`
pub fn package_path(scope: &str, name: &str, version: &str) -> String {
    format!("/{}", package_segments(scope, name, version).join("/"))
}
