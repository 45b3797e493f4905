//! Yanked and unyanked version filters

use jsr_registry::api::{VersionInfo, Versions};

/// Versions that have been yanked, in registry order
pub fn yanked_versions(versions: &Versions) -> Versions {
    filter_versions(versions, |info| info.yanked)
}

/// Versions that are still installable, in registry order
pub fn unyanked_versions(versions: &Versions) -> Versions {
    filter_versions(versions, |info| !info.yanked)
}

/// Split versions into `(yanked, unyanked)` in one pass
pub fn partition_versions(versions: &Versions) -> (Versions, Versions) {
    versions
        .iter()
        .map(|(version, info)| (version.clone(), *info))
        .partition(|(_, info)| info.yanked)
}

fn filter_versions<P>(versions: &Versions, predicate: P) -> Versions
where
    P: Fn(&VersionInfo) -> bool,
{
    versions
        .iter()
        .filter(|(_, info)| predicate(info))
        .map(|(version, info)| (version.clone(), *info))
        .collect()
}
