// src/render.rs
//! Markdown rendering for the summary document, plus the single
//! side-effecting write at the end of the pipeline.

use std::fmt::Write;
use std::fs;
use std::path::Path;

use crate::error::{DupsumError, Result};
use crate::summary::Summary;

/// Renders the summary as a markdown document.
///
/// Deterministic: the same summary always produces the same bytes.
#[must_use]
pub fn to_markdown(summary: &Summary) -> String {
    let mut out = String::new();

    writeln!(out, "# jscpd Duplicate Report Summary").ok();
    writeln!(out).ok();
    writeln!(out, "- Duplicate groups: {}", summary.duplicate_groups).ok();
    writeln!(
        out,
        "- Total duplicated lines (approx): {}",
        summary.total_duplicated_lines
    )
    .ok();
    writeln!(out).ok();
    writeln!(out, "## Top files by duplicate occurrences").ok();
    writeln!(out).ok();

    if summary.top_files.is_empty() {
        writeln!(out, "No duplicates found.").ok();
        return out;
    }

    writeln!(out, "| Count | File |").ok();
    writeln!(out, "|---:|---|").ok();
    for entry in &summary.top_files {
        writeln!(out, "| {} | `{}` |", entry.count, entry.file).ok();
    }

    out
}

/// Writes the rendered document to `path`, overwriting in full.
///
/// Creates the destination directory if absent. This is the one place the
/// pipeline is allowed to fail: an unwritable destination propagates.
///
/// # Errors
/// Returns [`DupsumError::Io`] when the directory cannot be created or the
/// file cannot be written.
pub fn write_summary(path: &Path, markdown: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| DupsumError::Io {
            source,
            path: parent.to_path_buf(),
        })?;
    }
    fs::write(path, markdown).map_err(|source| DupsumError::Io {
        source,
        path: path.to_path_buf(),
    })
}
