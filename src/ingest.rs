// src/ingest.rs
//! Best-effort ingestion of jscpd report files.
//!
//! Report output is telemetry, not a contract: a file that cannot be read
//! or parsed is skipped without comment, and a file missing the expected
//! duplicate array simply contributes zero groups.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::discovery;
use crate::fields;

/// Top-level keys that may hold the duplicate-group array, by jscpd version.
const GROUP_KEYS: [&str; 2] = ["duplicates", "clones"];

/// Collects duplicate-group records from every report file in `dir`.
///
/// Groups are returned as one flat sequence preserving file order and
/// within-file array order. An empty result means nothing was found; it is
/// indistinguishable from an empty report directory.
#[must_use]
pub fn collect_groups(dir: &Path) -> Vec<Value> {
    let mut groups = Vec::new();
    for path in discovery::report_files(dir) {
        if let Some(found) = load_report(&path) {
            groups.extend(found);
        }
    }
    groups
}

fn load_report(path: &Path) -> Option<Vec<Value>> {
    let content = fs::read_to_string(path).ok()?;
    let root: Value = serde_json::from_str(&content).ok()?;
    let array = fields::first_truthy(&root, &GROUP_KEYS)?.as_array()?;
    Some(array.clone())
}
