//! Candidate file enumeration and filtering.
//!
//! The search locations, the declaration-file rules, and the CoreLib
//! disambiguation all follow the layout of Serenity-based projects, which is
//! the only project shape the analysis driver understands.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::DiscoverError;

/// Filename prefixes that mark a declaration file as belonging to the core
/// library rather than to a third-party typings package.
const VENDOR_PREFIXES: [&str; 2] = ["serenity.", "serenity-"];

/// The core library's own ambient declaration file.
const CORELIB_FILE: &str = "serenity.corelib.d.ts";

/// Canonical location suffix of the CoreLib declarations shipped as typings.
const CORELIB_TYPINGS_SUFFIX: &str = "/typings/serenity/serenity.corelib.d.ts";

/// Returns the fixed search locations under `project_dir` that exist.
///
/// Absent directories are skipped without error.
fn search_roots(project_dir: &Path) -> Vec<PathBuf> {
    [
        project_dir.join("Modules"),
        project_dir.join("Imports"),
        project_dir.join("typings").join("serenity"),
        project_dir.join("wwwroot").join("Scripts").join("serenity"),
    ]
    .into_iter()
    .filter(|p| p.is_dir())
    .collect()
}

/// Lowercased filename of `path`, or an empty string if it has none.
fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Full path of `path` with forward slashes, lowercased, for suffix matching.
fn normalized_lower(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

/// Whether `path` passes the candidate filter.
///
/// A candidate is any `.ts` file, except declaration-only `.d.ts` files,
/// which are admitted only when they carry a recognized vendor prefix. All
/// comparisons are case-insensitive.
fn is_candidate(path: &Path) -> bool {
    let name = file_name_lower(path);
    if !name.ends_with(".ts") {
        return false;
    }
    if !name.ends_with(".d.ts") {
        return true;
    }
    VENDOR_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Whether `path` is a CoreLib declaration file under the canonical
/// `typings/serenity` location.
fn corelib_under_typings(path: &Path) -> bool {
    normalized_lower(path).ends_with(CORELIB_TYPINGS_SUFFIX)
}

/// Discovers the candidate source files of the project rooted at `project_dir`.
///
/// Searches the fixed subdirectory set recursively, applies the declaration
/// filter, resolves duplicate CoreLib declarations, and returns the surviving
/// paths sorted lexicographically (the determinism anchor for fingerprinting)
/// and deduplicated. File contents are not read.
pub fn discover_files(project_dir: &Path) -> Result<Vec<PathBuf>, DiscoverError> {
    let mut files = Vec::new();
    for root in search_roots(project_dir) {
        for entry in WalkDir::new(&root) {
            let entry = entry.map_err(|e| DiscoverError::Walk {
                path: root.clone(),
                source: e,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if is_candidate(&path) {
                files.push(path);
            }
        }
    }

    // If CoreLib declarations exist both under typings/serenity and
    // elsewhere, the non-typings copy is authoritative and the typings
    // copies are dropped.
    let corelib: Vec<&PathBuf> = files
        .iter()
        .filter(|p| file_name_lower(p) == CORELIB_FILE)
        .collect();
    if corelib.len() > 1 && corelib.iter().any(|p| !corelib_under_typings(p)) {
        files.retain(|p| !corelib_under_typings(p));
    }

    // Plain `sort` orders by path component, which disagrees with full-path
    // string order for siblings like `a/` vs `a-b/`. The fingerprint anchor
    // is the full path as a string, ascending.
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files.dedup_by(|a, b| a.as_os_str() == b.as_os_str());
    Ok(files)
}
