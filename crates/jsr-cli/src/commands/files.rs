//! `jsr files` command implementation.
//!
//! Prints the manifest of a package version, optionally only hidden or only
//! visible files.

use jsr_core::error::JsrResult;
use jsr_core::types::PackageRef;
use jsr_registry::api::Manifest;
use jsr_tools::{hidden_entries, visible_entries};

use super::CommandContext;

/// Which manifest entries to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFilter {
    All,
    Hidden,
    Visible,
}

impl FileFilter {
    pub fn from_flags(hidden: bool, visible: bool) -> Self {
        match (hidden, visible) {
            (true, _) => FileFilter::Hidden,
            (_, true) => FileFilter::Visible,
            _ => FileFilter::All,
        }
    }
}

/// Fetch the manifest entries of `package` selected by `filter`
pub async fn run(
    package: &PackageRef,
    filter: FileFilter,
    ctx: &CommandContext,
) -> JsrResult<Manifest> {
    let descriptor = ctx.client.fetch_package_ref(package).await?;

    Ok(match filter {
        FileFilter::All => descriptor.manifest,
        FileFilter::Hidden => hidden_entries(&descriptor.manifest),
        FileFilter::Visible => visible_entries(&descriptor.manifest),
    })
}

/// Execute the `jsr files` command
pub async fn execute(package: &PackageRef, filter: FileFilter, ctx: &CommandContext) -> JsrResult<()> {
    let manifest = run(package, filter, ctx).await?;
    ctx.output.json(&manifest)
}
