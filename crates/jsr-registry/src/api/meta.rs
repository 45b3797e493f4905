//! Package metadata document (`meta.json`)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Published versions keyed by version string, in registry order
pub type Versions = IndexMap<String, VersionInfo>;

/// Metadata for one package across all of its versions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackageMeta {
    /// Package scope, `dunno` in `@dunno/object`
    pub scope: String,
    /// Package name, `object` in `@dunno/object`
    pub name: String,
    /// Latest version; `null` when nothing has been published yet
    #[serde(default)]
    pub latest: Option<String>,
    /// All published versions
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub versions: Versions,
}

/// Per-version entry of [`PackageMeta::versions`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VersionInfo {
    /// Version was withdrawn by its publisher
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub yanked: bool,
}

impl PackageMeta {
    /// Entry for the latest version, if the registry lists one
    pub fn latest_info(&self) -> Option<(&str, &VersionInfo)> {
        let latest = self.latest.as_deref()?;
        self.versions
            .get_key_value(latest)
            .map(|(version, info)| (version.as_str(), info))
    }

    /// Yanked flag of `version`, `None` when the version is not published
    pub fn is_yanked(&self, version: &str) -> Option<bool> {
        self.versions.get(version).map(|info| info.yanked)
    }
}
