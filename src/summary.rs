// src/summary.rs
//! Aggregation of duplicate-group records into summary statistics.
//!
//! This stage is pure data: no I/O, no failure modes. Missing or
//! malformed fields degrade to a zero contribution instead of erroring,
//! so the group count stays honest even when individual records carry no
//! usable line or file data.

use std::collections::HashMap;

use serde_json::Value;

use crate::fields;

/// Occurrence-list keys, by jscpd version.
const INSTANCE_KEYS: [&str; 2] = ["instances", "occurrences"];

/// Filename-bearing keys on an occurrence record, in precedence order.
const FILE_KEYS: [&str; 4] = ["filename", "name", "firstFile", "file"];

/// Maximum entries kept in the ranked file list.
pub const MAX_TOP_FILES: usize = 30;

/// One file and how many duplicate occurrences landed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub file: String,
    pub count: usize,
}

/// Aggregate statistics across all ingested report files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Total duplicate groups seen, usable or not.
    pub duplicate_groups: usize,
    /// Approximate duplicated-line total. Overlapping groups and
    /// multi-instance groups are not deduplicated.
    pub total_duplicated_lines: usize,
    /// Files ranked by descending occurrence count, at most
    /// [`MAX_TOP_FILES`] entries, ties in first-seen order.
    pub top_files: Vec<FileCount>,
}

/// Reduces the flat group sequence to a [`Summary`].
#[must_use]
pub fn summarize(groups: &[Value]) -> Summary {
    let mut total_lines = 0usize;
    let mut counts: Vec<FileCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for group in groups {
        total_lines = total_lines.saturating_add(group_lines(group));
        for inst in group_instances(group) {
            let Some(file) = occurrence_file(inst) else {
                continue;
            };
            match index.get(file) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(file.to_string(), counts.len());
                    counts.push(FileCount {
                        file: file.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(MAX_TOP_FILES);

    Summary {
        duplicate_groups: groups.len(),
        total_duplicated_lines: total_lines,
        top_files: counts,
    }
}

/// Estimates one group's duplicated-line contribution.
///
/// A numeric `lines` field wins, even at zero; otherwise the line count of
/// an inline `fragment`; otherwise nothing.
fn group_lines(group: &Value) -> usize {
    if let Some(n) = group.get("lines").and_then(Value::as_u64) {
        return usize::try_from(n).unwrap_or(usize::MAX);
    }
    match group.get("fragment").and_then(Value::as_str) {
        Some(fragment) => fragment.matches('\n').count() + 1,
        None => 0,
    }
}

fn group_instances(group: &Value) -> &[Value] {
    fields::first_truthy(group, &INSTANCE_KEYS)
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice)
}

/// Extracts the filename from an occurrence record, if it carries one.
///
/// The first truthy candidate key decides the outcome: a string is the
/// filename, an object unwraps one level through its `name` field, and
/// anything else means the occurrence counts toward no file.
fn occurrence_file(inst: &Value) -> Option<&str> {
    match fields::first_truthy(inst, &FILE_KEYS)? {
        Value::String(s) => Some(s.as_str()),
        Value::Object(o) => o.get("name").and_then(Value::as_str).filter(|s| !s.is_empty()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_input_is_a_zero_summary() {
        let s = summarize(&[]);
        assert_eq!(s, Summary::default());
    }

    #[test]
    fn counts_groups_lines_and_files() {
        let groups = vec![json!({
            "lines": 10,
            "instances": [{"filename": "a.py"}, {"name": "b.py"}]
        })];
        let s = summarize(&groups);
        assert_eq!(s.duplicate_groups, 1);
        assert_eq!(s.total_duplicated_lines, 10);
        assert_eq!(s.top_files.len(), 2);
        assert!(s.top_files.iter().any(|f| f.file == "a.py" && f.count == 1));
        assert!(s.top_files.iter().any(|f| f.file == "b.py" && f.count == 1));
    }

    #[test]
    fn fragment_lines_are_newlines_plus_one() {
        let groups = vec![json!({"fragment": "x\ny\nz"})];
        assert_eq!(summarize(&groups).total_duplicated_lines, 3);
    }

    #[test]
    fn lines_field_wins_over_fragment() {
        let groups = vec![json!({"lines": 7, "fragment": "x\ny"})];
        assert_eq!(summarize(&groups).total_duplicated_lines, 7);
    }

    #[test]
    fn group_without_line_data_contributes_zero() {
        let groups = vec![json!({"instances": []}), json!({"lines": 4})];
        let s = summarize(&groups);
        assert_eq!(s.duplicate_groups, 2);
        assert_eq!(s.total_duplicated_lines, 4);
    }

    #[test]
    fn nested_filename_object_unwraps_through_name() {
        let groups = vec![json!({
            "occurrences": [{"filename": {"name": "c.py"}}]
        })];
        let s = summarize(&groups);
        assert_eq!(s.top_files, vec![FileCount { file: "c.py".into(), count: 1 }]);
    }

    #[test]
    fn first_file_style_records_are_counted() {
        let groups = vec![json!({
            "instances": [
                {"firstFile": {"name": "x.rs"}},
                {"file": "y.rs"}
            ]
        })];
        let s = summarize(&groups);
        assert_eq!(s.top_files.len(), 2);
    }

    #[test]
    fn empty_filename_falls_through_to_next_key() {
        let groups = vec![json!({
            "instances": [{"filename": "", "name": "real.py"}]
        })];
        let s = summarize(&groups);
        assert_eq!(s.top_files, vec![FileCount { file: "real.py".into(), count: 1 }]);
    }

    #[test]
    fn unusable_occurrences_count_toward_no_file() {
        let groups = vec![json!({
            "instances": [
                {},
                {"filename": {"path": "no-name-field"}},
                {"filename": 42},
                {"filename": "ok.py"}
            ]
        })];
        let s = summarize(&groups);
        assert_eq!(s.top_files, vec![FileCount { file: "ok.py".into(), count: 1 }]);
    }

    #[test]
    fn ranking_is_descending_with_first_seen_ties() {
        let groups = vec![
            json!({"instances": [{"filename": "once.py"}]}),
            json!({"instances": [{"filename": "tie_a.py"}]}),
            json!({"instances": [{"filename": "tie_b.py"}]}),
            json!({"instances": [{"filename": "twice.py"}, {"filename": "twice.py"}]}),
        ];
        let s = summarize(&groups);
        let order: Vec<_> = s.top_files.iter().map(|f| f.file.as_str()).collect();
        assert_eq!(order, ["twice.py", "once.py", "tie_a.py", "tie_b.py"]);
    }

    #[test]
    fn top_files_is_capped_at_thirty() {
        let groups: Vec<Value> = (0..40)
            .map(|i| json!({"instances": [{"filename": format!("f{i:02}.py")}]}))
            .collect();
        let s = summarize(&groups);
        assert_eq!(s.top_files.len(), MAX_TOP_FILES);
        assert_eq!(s.duplicate_groups, 40);
    }
}
