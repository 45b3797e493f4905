//! `jsr deps` command implementation.
//!
//! Prints the module graph of a package version, narrowed to one module or
//! to imports/exports of a given type.

use indexmap::IndexMap;
use jsr_core::error::JsrResult;
use jsr_core::types::PackageRef;
use jsr_registry::api::{Dependency, DependencyKind, DependencyType, Package};
use jsr_tools::DependencyFilter;

use super::CommandContext;

/// Module graph selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepsQuery {
    /// Only this module path
    pub module: Option<String>,
    pub kind: Option<DependencyKind>,
    pub dependency_type: Option<DependencyType>,
}

impl DepsQuery {
    fn is_filtered(&self) -> bool {
        self.kind.is_some() || self.dependency_type.is_some()
    }

    fn select(&self, dependencies: &[Dependency]) -> Vec<Dependency> {
        match (self.kind, self.dependency_type) {
            (Some(kind), Some(dependency_type)) => DependencyFilter::kind(kind)
                .with_type(dependency_type)
                .apply(dependencies),
            (Some(kind), None) => DependencyFilter::kind(kind).apply(dependencies),
            (None, Some(dependency_type)) => dependencies
                .iter()
                .filter(|dependency| dependency.dependency_type == Some(dependency_type))
                .cloned()
                .collect(),
            (None, None) => dependencies.to_vec(),
        }
    }

    /// Apply this query to a fetched package
    pub fn apply(&self, package: &Package) -> IndexMap<String, Vec<Dependency>> {
        if let Some(module) = &self.module {
            let selected = self.select(package.dependencies(module));
            return IndexMap::from([(module.clone(), selected)]);
        }

        package
            .module_graph2
            .iter()
            .map(|(path, module)| (path.clone(), self.select(&module.dependencies)))
            .filter(|(_, selected)| !self.is_filtered() || !selected.is_empty())
            .collect()
    }
}

/// Fetch the module graph of `package` and apply `query`
pub async fn run(
    package: &PackageRef,
    query: &DepsQuery,
    ctx: &CommandContext,
) -> JsrResult<IndexMap<String, Vec<Dependency>>> {
    let descriptor = ctx.client.fetch_package_ref(package).await?;
    Ok(query.apply(&descriptor))
}

/// Execute the `jsr deps` command
pub async fn execute(package: &PackageRef, query: &DepsQuery, ctx: &CommandContext) -> JsrResult<()> {
    let graph = run(package, query, ctx).await?;
    if graph.values().all(Vec::is_empty) {
        ctx.output.warn(&format!("No matching dependencies in {}", package));
    }
    ctx.output.json(&graph)
}
