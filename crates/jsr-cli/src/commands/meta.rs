//! `jsr meta` command implementation.
//!
//! Prints a package's metadata, or only its yanked or unyanked versions.

use jsr_core::error::JsrResult;
use jsr_core::types::PackageRef;
use jsr_registry::api::Versions;
use jsr_tools::{unyanked_versions, yanked_versions};

use super::CommandContext;

/// Which versions to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionFilter {
    All,
    Yanked,
    Unyanked,
}

impl VersionFilter {
    pub fn from_flags(yanked: bool, unyanked: bool) -> Self {
        match (yanked, unyanked) {
            (true, _) => VersionFilter::Yanked,
            (_, true) => VersionFilter::Unyanked,
            _ => VersionFilter::All,
        }
    }
}

/// Fetch the versions of `package` selected by `filter`
pub async fn run(
    package: &PackageRef,
    filter: VersionFilter,
    ctx: &CommandContext,
) -> JsrResult<Versions> {
    let meta = ctx.client.fetch_package_meta_ref(package).await?;

    Ok(match filter {
        VersionFilter::All => meta.versions,
        VersionFilter::Yanked => yanked_versions(&meta.versions),
        VersionFilter::Unyanked => unyanked_versions(&meta.versions),
    })
}

/// Execute the `jsr meta` command
pub async fn execute(
    package: &PackageRef,
    filter: VersionFilter,
    ctx: &CommandContext,
) -> JsrResult<()> {
    if filter == VersionFilter::All {
        let meta = ctx.client.fetch_package_meta_ref(package).await?;
        return ctx.output.json(&meta);
    }

    let versions = run(package, filter, ctx).await?;
    if versions.is_empty() {
        ctx.output.warn(&format!("No matching versions of {}", package));
    }
    ctx.output.json(&versions)
}
