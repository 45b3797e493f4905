//! Query helper benchmarks
//!
//! Version, manifest and dependency filters over decoded documents.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jsr_benchmarks::{criterion_config, package_json, package_meta_json};
use jsr_registry::api::{Package, PackageMeta};
use jsr_tools::{
    config_files, dynamic_imports, hidden_entries, partition_versions, static_exports,
    visible_entries,
};

fn bench_version_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("version_filters");

    for count in [100, 1000] {
        let meta: PackageMeta = serde_json::from_str(&package_meta_json(count)).unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("partition", count),
            &meta.versions,
            |b, versions| {
                b.iter(|| black_box(partition_versions(versions)));
            },
        );
    }

    group.finish();
}

fn bench_manifest_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("manifest_filters");
    let package: Package = serde_json::from_str(&package_json(1000, 0)).unwrap();
    group.throughput(Throughput::Elements(package.manifest.len() as u64));

    group.bench_function("hidden", |b| {
        b.iter(|| black_box(hidden_entries(&package.manifest)));
    });
    group.bench_function("visible", |b| {
        b.iter(|| black_box(visible_entries(&package.manifest)));
    });
    group.bench_function("config_files", |b| {
        b.iter(|| black_box(config_files(&package.manifest)));
    });

    group.finish();
}

fn bench_dependency_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_filters");

    for deps in [8, 64, 512] {
        let package: Package = serde_json::from_str(&package_json(1, deps)).unwrap();
        group.throughput(Throughput::Elements(deps as u64));
        group.bench_with_input(BenchmarkId::new("dynamic_imports", deps), &package, |b, package| {
            b.iter(|| black_box(dynamic_imports(package.dependencies("/src/mod_0.ts"))));
        });
        group.bench_with_input(BenchmarkId::new("static_exports", deps), &package, |b, package| {
            b.iter(|| black_box(static_exports(package.dependencies("/src/mod_0.ts"))));
        });
    }

    group.bench_function("all_dependencies", |b| {
        let package: Package = serde_json::from_str(&package_json(200, 16)).unwrap();
        b.iter(|| black_box(package.all_dependencies().count()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_version_filters, bench_manifest_filters, bench_dependency_filters
}
criterion_main!(benches);
