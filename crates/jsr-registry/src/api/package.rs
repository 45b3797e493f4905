//! Version descriptor document (`{version}_meta.json`)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Files of a published version keyed by package-rooted path (`/src/mod.ts`)
pub type Manifest = IndexMap<String, FileEntry>;

/// Module graph keyed by the path of the importing module
pub type ModuleGraph = IndexMap<String, ModuleInfo>;

/// `[start, end]` position pairs locating a specifier in its source file
pub type SpecifierRange = Vec<[u64; 2]>;

/// Content descriptor for one published version
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Package {
    /// Every file in the version, including its config files
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub manifest: Manifest,
    /// Legacy module graph, kept as raw JSON
    ///
    /// Superseded by `module_graph2` shortly after it shipped; its shape is
    /// not modeled.
    #[serde(
        rename = "moduleGraph1",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub module_graph1: Option<serde_json::Value>,
    /// Module graph for JavaScript and TypeScript modules
    #[serde(
        rename = "moduleGraph2",
        default,
        deserialize_with = "super::null_as_default"
    )]
    pub module_graph2: ModuleGraph,
}

/// Manifest entry for one file
///
/// Missing fields read as zero and the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    /// File size in bytes
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub size: u64,
    /// Content hash, e.g. `sha256-…`
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub checksum: String,
}

/// Dependencies of one module
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModuleInfo {
    #[serde(
        default,
        alias = "dependecies",
        deserialize_with = "super::null_as_default"
    )]
    pub dependencies: Vec<Dependency>,
}

/// One import or export edge of the module graph
///
/// Entries the registry writes for `import()` calls with a computed argument
/// carry `argument` instead of `kind` and `specifier`; those fields then read
/// as [`DependencyKind::Other`] and the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Dependency {
    /// `static` for `import`/`export` statements, `dynamic` for `import()`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub dependency_type: Option<DependencyType>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub kind: DependencyKind,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub specifier: String,
    #[serde(
        rename = "specifierRange",
        default,
        deserialize_with = "super::null_as_default"
    )]
    pub specifier_range: SpecifierRange,
    /// Source text of a dynamic import's argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    #[serde(
        rename = "argumentRange",
        default,
        deserialize_with = "super::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub argument_range: SpecifierRange,
}

/// How a dependency is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    Static,
    Dynamic,
    /// Any type this crate does not know about
    #[serde(other)]
    Other,
}

/// Direction of a dependency edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Import,
    Export,
    /// Kinds such as `importType` that are neither a plain import nor export,
    /// and entries without a kind
    #[default]
    #[serde(other)]
    Other,
}

impl Package {
    /// Dependencies of the module at `path`; empty when it has none
    pub fn dependencies(&self, path: &str) -> &[Dependency] {
        self.module_graph2
            .get(path)
            .map(|module| module.dependencies.as_slice())
            .unwrap_or_default()
    }

    /// Every dependency in the graph paired with the module declaring it
    pub fn all_dependencies(&self) -> impl Iterator<Item = (&str, &Dependency)> {
        self.module_graph2.iter().flat_map(|(path, module)| {
            module
                .dependencies
                .iter()
                .map(move |dependency| (path.as_str(), dependency))
        })
    }

    /// Total size in bytes of all files in the manifest
    pub fn total_size(&self) -> u64 {
        self.manifest.values().map(|entry| entry.size).sum()
    }
}

impl Dependency {
    /// Create a dependency without a source range
    pub fn new(
        kind: DependencyKind,
        dependency_type: Option<DependencyType>,
        specifier: impl Into<String>,
    ) -> Self {
        Self {
            dependency_type,
            kind,
            specifier: specifier.into(),
            ..Default::default()
        }
    }

    pub fn is_import(&self) -> bool {
        self.kind == DependencyKind::Import
    }

    pub fn is_export(&self) -> bool {
        self.kind == DependencyKind::Export
    }

    pub fn is_static(&self) -> bool {
        self.dependency_type == Some(DependencyType::Static)
    }

    pub fn is_dynamic(&self) -> bool {
        self.dependency_type == Some(DependencyType::Dynamic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE: &str = r#"{
        "manifest": {
            "/jsr.json": { "size": 120, "checksum": "sha256-aaa" },
            "/mod.ts": { "size": 300, "checksum": "sha256-bbb" }
        },
        "moduleGraph1": { "/mod.ts": { "dependencies": ["whatever"] } },
        "moduleGraph2": {
            "/mod.ts": {
                "dependencies": [
                    {
                        "type": "static",
                        "kind": "import",
                        "specifier": "./util.ts",
                        "specifierRange": [[0, 20], [0, 31]]
                    },
                    {
                        "type": "dynamic",
                        "kind": "import",
                        "specifier": "./lazy.ts",
                        "argumentRange": [[3, 12], [3, 23]]
                    },
                    {
                        "kind": "importType",
                        "specifier": "./types.ts",
                        "specifierRange": [[1, 0], [1, 10]]
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn test_deserialize_package() {
        let package: Package = serde_json::from_str(PACKAGE).unwrap();
        assert_eq!(package.manifest.len(), 2);
        assert_eq!(package.manifest["/jsr.json"].size, 120);
        assert_eq!(package.manifest["/mod.ts"].checksum, "sha256-bbb");
        assert_eq!(package.total_size(), 420);
        assert!(package.module_graph1.is_some());

        let deps = package.dependencies("/mod.ts");
        assert_eq!(deps.len(), 3);
        assert_eq!(deps[0].specifier_range, vec![[0u64, 20], [0, 31]]);
        assert!(deps[0].is_import() && deps[0].is_static());
        assert!(deps[1].is_dynamic());
        assert!(deps[1].specifier_range.is_empty());
        assert_eq!(deps[2].kind, DependencyKind::Other);
        assert_eq!(deps[2].dependency_type, None);
    }

    #[test]
    fn test_missing_module_has_no_dependencies() {
        let package: Package = serde_json::from_str(PACKAGE).unwrap();
        assert!(package.dependencies("/missing.ts").is_empty());
        assert_eq!(package.all_dependencies().count(), 3);
        assert!(package
            .all_dependencies()
            .all(|(path, _)| path == "/mod.ts"));
    }

    #[test]
    fn test_empty_document() {
        let package: Package = serde_json::from_str("{}").unwrap();
        assert!(package.manifest.is_empty());
        assert!(package.module_graph1.is_none());
        assert!(package.module_graph2.is_empty());
    }

    #[test]
    fn test_misspelled_dependencies_key_is_accepted() {
        let module: ModuleInfo = serde_json::from_str(
            r#"{"dependecies":[{"type":"static","kind":"export","specifier":"./a.ts"}]}"#,
        )
        .unwrap();
        assert_eq!(module.dependencies.len(), 1);
        assert!(module.dependencies[0].is_export());
    }

    #[test]
    fn test_dynamic_entry_without_kind_or_specifier() {
        let package: Package = serde_json::from_str(
            r#"{
                "manifest": { "/mod.ts": { "size": 64, "checksum": "sha256-c" } },
                "moduleGraph2": {
                    "/mod.ts": {
                        "dependencies": [
                            { "type": "static", "kind": "import", "specifier": "./a.ts" },
                            {
                                "type": "dynamic",
                                "argument": "`./locale/${lang}.ts`",
                                "argumentRange": [[5, 17], [5, 39]]
                            }
                        ]
                    }
                }
            }"#,
        )
        .unwrap();

        let deps = package.dependencies("/mod.ts");
        assert_eq!(deps.len(), 2);
        assert!(deps[1].is_dynamic());
        assert_eq!(deps[1].kind, DependencyKind::Other);
        assert!(!deps[1].is_import() && !deps[1].is_export());
        assert_eq!(deps[1].specifier, "");
        assert_eq!(deps[1].argument.as_deref(), Some("`./locale/${lang}.ts`"));
        assert_eq!(deps[1].argument_range, vec![[5u64, 17], [5, 39]]);
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let package: Package = serde_json::from_str(
            r#"{
                "manifest": { "/README.md": { "size": null, "checksum": "sha256-r" } },
                "moduleGraph2": null
            }"#,
        )
        .unwrap();
        assert_eq!(package.manifest["/README.md"].size, 0);
        assert!(package.module_graph2.is_empty());

        let package: Package = serde_json::from_str(
            r#"{
                "manifest": null,
                "moduleGraph2": { "/mod.ts": { "dependencies": null } }
            }"#,
        )
        .unwrap();
        assert!(package.manifest.is_empty());
        assert!(package.dependencies("/mod.ts").is_empty());

        let entry: FileEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry, FileEntry::default());
    }

    #[test]
    fn test_legacy_graph_is_not_serialized_when_absent() {
        let json = serde_json::to_value(Package::default()).unwrap();
        assert!(json.get("moduleGraph1").is_none());
        assert!(json.get("moduleGraph2").is_some());
    }
}
