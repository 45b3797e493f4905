//! `jsr info` command implementation.
//!
//! Summarizes one version: yanked status, file counts and config files.

use jsr_core::error::JsrResult;
use jsr_core::types::PackageRef;
use jsr_tools::{config_files, exports, has_file, hidden_entries, imports};
use serde::Serialize;

use super::CommandContext;

/// Summary printed by `jsr info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageSummary {
    pub package: String,
    pub version: String,
    pub latest: Option<String>,
    /// `None` when the version is missing from the package metadata
    pub yanked: Option<bool>,
    pub files: usize,
    pub hidden_files: usize,
    pub total_size: u64,
    pub modules: usize,
    pub imports: usize,
    pub exports: usize,
    /// Root config files as shipped, e.g. `deno.jsonc`
    pub config_files: Vec<String>,
}

/// Fetch metadata and descriptor of `package` and summarize them
pub async fn run(package: &PackageRef, ctx: &CommandContext) -> JsrResult<PackageSummary> {
    let version = package.require_version()?;
    let meta = ctx.client.fetch_package_meta_ref(package).await?;
    let descriptor = ctx.client.fetch_package_ref(package).await?;

    let (import_count, export_count) = descriptor
        .module_graph2
        .values()
        .fold((0, 0), |(imported, exported), module| {
            (
                imported + imports(&module.dependencies).len(),
                exported + exports(&module.dependencies).len(),
            )
        });

    Ok(PackageSummary {
        package: format!("@{}/{}", package.scope, package.name),
        version: version.to_string(),
        latest: meta.latest.clone(),
        yanked: meta.is_yanked(version),
        files: descriptor.manifest.len(),
        hidden_files: hidden_entries(&descriptor.manifest).len(),
        total_size: descriptor.total_size(),
        modules: descriptor.module_graph2.len(),
        imports: import_count,
        exports: export_count,
        config_files: config_files(&descriptor.manifest)
            .into_iter()
            .filter_map(|file| {
                file.paths()
                    .iter()
                    .find(|path| has_file(&descriptor.manifest, path))
            })
            .map(|path| path.trim_start_matches('/').to_string())
            .collect(),
    })
}

/// Execute the `jsr info` command
pub async fn execute(package: &PackageRef, ctx: &CommandContext) -> JsrResult<()> {
    let summary = run(package, ctx).await?;
    if summary.yanked == Some(true) {
        ctx.output.warn(&format!("{} is yanked", package));
    }
    ctx.output.json(&summary)
}
