//! Import and export filters over module graph dependencies
//!
//! Every helper is a [`DependencyFilter`] applied to a dependency slice, such
//! as the one returned by `Package::dependencies`. A dependency without a
//! `type` is kept by [`imports`] and [`exports`] but by none of the typed
//! filters.

use jsr_registry::api::{Dependency, DependencyKind, DependencyType};

/// Predicate over a dependency's kind and, optionally, its type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyFilter {
    pub kind: DependencyKind,
    pub dependency_type: Option<DependencyType>,
}

impl DependencyFilter {
    /// Match every dependency of `kind`, whatever its type
    pub fn kind(kind: DependencyKind) -> Self {
        Self {
            kind,
            dependency_type: None,
        }
    }

    /// Additionally require `dependency_type`
    pub fn with_type(mut self, dependency_type: DependencyType) -> Self {
        self.dependency_type = Some(dependency_type);
        self
    }

    pub fn matches(&self, dependency: &Dependency) -> bool {
        dependency.kind == self.kind
            && match self.dependency_type {
                Some(wanted) => dependency.dependency_type == Some(wanted),
                None => true,
            }
    }

    /// Clone the matching dependencies, keeping their order
    pub fn apply(&self, dependencies: &[Dependency]) -> Vec<Dependency> {
        dependencies
            .iter()
            .filter(|dependency| self.matches(dependency))
            .cloned()
            .collect()
    }
}

pub fn imports(dependencies: &[Dependency]) -> Vec<Dependency> {
    DependencyFilter::kind(DependencyKind::Import).apply(dependencies)
}

pub fn static_imports(dependencies: &[Dependency]) -> Vec<Dependency> {
    DependencyFilter::kind(DependencyKind::Import)
        .with_type(DependencyType::Static)
        .apply(dependencies)
}

pub fn dynamic_imports(dependencies: &[Dependency]) -> Vec<Dependency> {
    DependencyFilter::kind(DependencyKind::Import)
        .with_type(DependencyType::Dynamic)
        .apply(dependencies)
}

pub fn exports(dependencies: &[Dependency]) -> Vec<Dependency> {
    DependencyFilter::kind(DependencyKind::Export).apply(dependencies)
}

pub fn static_exports(dependencies: &[Dependency]) -> Vec<Dependency> {
    DependencyFilter::kind(DependencyKind::Export)
        .with_type(DependencyType::Static)
        .apply(dependencies)
}

pub fn dynamic_exports(dependencies: &[Dependency]) -> Vec<Dependency> {
    DependencyFilter::kind(DependencyKind::Export)
        .with_type(DependencyType::Dynamic)
        .apply(dependencies)
}
