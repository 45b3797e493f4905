//! Manifest queries: hidden files and well-known config files
//!
//! A manifest path is hidden when its final segment starts with `.` or `_`
//! (see `jsr_core::utils::is_hidden_path`). Directories do not propagate:
//! `/_internal/mod.ts` is visible.

use jsr_core::utils::is_hidden_path;
use jsr_registry::api::Manifest;

/// Config files a package may ship at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    Jsr,
    Package,
    Deno,
    Bunfig,
}

impl ConfigFile {
    pub const ALL: [ConfigFile; 4] = [
        ConfigFile::Jsr,
        ConfigFile::Package,
        ConfigFile::Deno,
        ConfigFile::Bunfig,
    ];

    /// Manifest paths that identify this config file
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            ConfigFile::Jsr => &["/jsr.json"],
            ConfigFile::Package => &["/package.json"],
            ConfigFile::Deno => &["/deno.json", "/deno.jsonc"],
            ConfigFile::Bunfig => &["/bunfig.toml"],
        }
    }

    pub fn is_present(&self, manifest: &Manifest) -> bool {
        self.paths().iter().any(|path| has_file(manifest, path))
    }
}

/// Entries whose final path segment is hidden
pub fn hidden_entries(manifest: &Manifest) -> Manifest {
    filter_entries(manifest, true)
}

/// Entries whose final path segment is not hidden
pub fn visible_entries(manifest: &Manifest) -> Manifest {
    filter_entries(manifest, false)
}

fn filter_entries(manifest: &Manifest, hidden: bool) -> Manifest {
    manifest
        .iter()
        .filter(|(path, _)| is_hidden_path(path) == hidden)
        .map(|(path, entry)| (path.clone(), entry.clone()))
        .collect()
}

/// Exact, case-sensitive lookup of `path`
pub fn has_file(manifest: &Manifest, path: &str) -> bool {
    manifest.contains_key(path)
}

pub fn has_jsr_json(manifest: &Manifest) -> bool {
    ConfigFile::Jsr.is_present(manifest)
}

pub fn has_package_json(manifest: &Manifest) -> bool {
    ConfigFile::Package.is_present(manifest)
}

/// `/deno.json` or `/deno.jsonc`
pub fn has_deno_json(manifest: &Manifest) -> bool {
    ConfigFile::Deno.is_present(manifest)
}

pub fn has_bunfig_toml(manifest: &Manifest) -> bool {
    ConfigFile::Bunfig.is_present(manifest)
}

/// Config files present in `manifest`, in [`ConfigFile::ALL`] order
pub fn config_files(manifest: &Manifest) -> Vec<ConfigFile> {
    ConfigFile::ALL
        .into_iter()
        .filter(|file| file.is_present(manifest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsr_registry::api::FileEntry;
    use proptest::prelude::*;

    fn entry(size: u64) -> FileEntry {
        FileEntry {
            size,
            checksum: format!("sha256-{:04}", size),
        }
    }

    fn manifest(paths: &[&str]) -> Manifest {
        paths
            .iter()
            .enumerate()
            .map(|(i, path)| (path.to_string(), entry(i as u64)))
            .collect()
    }

    #[test]
    fn test_hidden_and_visible_entries() {
        let files = manifest(&["/jsr.json", "/.hidden", "/src/index.ts"]);

        let hidden = hidden_entries(&files);
        assert_eq!(hidden.keys().collect::<Vec<_>>(), vec!["/.hidden"]);
        assert_eq!(hidden["/.hidden"], files["/.hidden"]);

        let visible = visible_entries(&files);
        assert_eq!(
            visible.keys().collect::<Vec<_>>(),
            vec!["/jsr.json", "/src/index.ts"]
        );
    }

    #[test]
    fn test_only_last_segment_is_checked() {
        let files = manifest(&["/_internal/mod.ts", "/src/_util.ts", "/.github/ci.yml"]);
        assert_eq!(
            hidden_entries(&files).keys().collect::<Vec<_>>(),
            vec!["/src/_util.ts"]
        );
    }

    #[test]
    fn test_has_file_is_exact() {
        let files = manifest(&["/jsr.json", "/.hidden", "/src/index.ts"]);
        assert!(has_file(&files, "/jsr.json"));
        assert!(!has_file(&files, "/JSR.json"));
        assert!(!has_file(&files, "jsr.json"));
        assert!(!has_file(&files, " /jsr.json"));
        assert!(!has_file(&files, "/src"));
    }

    #[test]
    fn test_config_file_checks() {
        let files = manifest(&["/jsr.json", "/deno.jsonc", "/src/package.json"]);
        assert!(has_jsr_json(&files));
        assert!(has_deno_json(&files));
        assert!(!has_package_json(&files));
        assert!(!has_bunfig_toml(&files));
        assert_eq!(config_files(&files), vec![ConfigFile::Jsr, ConfigFile::Deno]);
    }

    #[test]
    fn test_empty_manifest() {
        let empty = Manifest::new();
        assert!(hidden_entries(&empty).is_empty());
        assert!(visible_entries(&empty).is_empty());
        assert!(config_files(&empty).is_empty());
        assert!(!has_file(&empty, "/jsr.json"));
    }

    proptest! {
        #[test]
        fn prop_hidden_and_visible_partition_manifest(
            paths in prop::collection::vec("(/[._a-z]{1,5}){1,3}", 0..16),
        ) {
            let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
            let files = manifest(&refs);
            let hidden = hidden_entries(&files);
            let visible = visible_entries(&files);

            prop_assert_eq!(hidden.len() + visible.len(), files.len());
            for path in files.keys() {
                prop_assert!(hidden.contains_key(path) != visible.contains_key(path));
            }
        }
    }
}
