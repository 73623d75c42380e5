// src/discovery.rs
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Finds jscpd report files directly inside `dir` (non-recursive).
///
/// Returns paths sorted by name so repeated runs over an unchanged
/// directory process files in the same order. A missing or unreadable
/// directory yields an empty list; zero report files is a normal case.
#[must_use]
pub fn report_files(dir: &Path) -> Vec<PathBuf> {
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    let mut paths: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();

    paths.sort();
    paths
}
