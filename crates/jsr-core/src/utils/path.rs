//! Path utilities for package manifest entries.
//!
//! Manifest keys are registry paths such as `/src/mod.ts`: always `/`
//! separated and rooted at the package, independent of the host platform.
//! They are classified here as plain strings rather than `std::path::Path`.

/// Final `/`-separated segment of a registry path
///
/// A trailing slash yields an empty segment.
pub fn last_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Check if a single path segment names a hidden entry (`.` or `_` prefix)
pub fn is_hidden_segment(segment: &str) -> bool {
    segment.starts_with('.') || segment.starts_with('_')
}

/// Check if a registry path is hidden
///
/// Only the final segment is considered: `/_internal/mod.ts` is visible while
/// `/src/_mod.ts` and `/.github` are hidden.
pub fn is_hidden_path(path: &str) -> bool {
    is_hidden_segment(last_segment(path))
}
