//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use serde_json::{json, Map, Value};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Package metadata with `count` versions, every fifth one yanked
pub fn package_meta_json(count: usize) -> String {
    let versions: Map<String, Value> = (0..count)
        .map(|i| (format!("1.{}.0", i), json!({ "yanked": i % 5 == 0 })))
        .collect();

    json!({
        "scope": "bench",
        "name": "package",
        "latest": format!("1.{}.0", count.saturating_sub(1)),
        "versions": versions,
    })
    .to_string()
}

/// Package descriptor with `modules` modules of `deps_per_module` dependencies
/// each, plus one hidden file per ten modules
pub fn package_json(modules: usize, deps_per_module: usize) -> String {
    let mut manifest = Map::new();
    let mut graph = Map::new();

    for i in 0..modules {
        let path = format!("/src/mod_{}.ts", i);
        manifest.insert(
            path.clone(),
            json!({ "size": 1024 + i, "checksum": format!("sha256-{:064x}", i) }),
        );
        if i % 10 == 0 {
            manifest.insert(
                format!("/src/_internal_{}.ts", i),
                json!({ "size": 256, "checksum": format!("sha256-{:064x}", i + modules) }),
            );
        }

        let dependencies: Vec<Value> = (0..deps_per_module)
            .map(|d| {
                json!({
                    "type": if d % 3 == 0 { "dynamic" } else { "static" },
                    "kind": if d % 2 == 0 { "import" } else { "export" },
                    "specifier": format!("./mod_{}.ts", (i + d + 1) % modules.max(1)),
                    "specifierRange": [[d, 7], [d, 24]],
                })
            })
            .collect();
        graph.insert(path, json!({ "dependencies": dependencies }));
    }
    manifest.insert(
        "/jsr.json".to_string(),
        json!({ "size": 97, "checksum": "sha256-jsr" }),
    );

    json!({ "manifest": manifest, "moduleGraph2": graph }).to_string()
}
