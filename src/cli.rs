// src/cli.rs
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{ingest, render, summary};

/// Directory the upstream jscpd runs drop their JSON reports into.
pub const REPORTS_DIR: &str = "reports/jscpd";

/// Output document name, written inside [`REPORTS_DIR`].
pub const SUMMARY_FILE: &str = "summary.md";

/// Takes no arguments; `--help` and `--version` only.
#[derive(Parser)]
#[command(name = "dupsum", version, about = "Summarize jscpd duplicate reports")]
pub struct Cli {}

/// Runs the summary pipeline against the fixed report directory.
///
/// Returns the path of the written document.
///
/// # Errors
/// Returns error only when the output document cannot be written; report
/// files that fail to read or parse are skipped.
pub fn handle_summary() -> Result<PathBuf> {
    let reports_dir = Path::new(REPORTS_DIR);
    let groups = ingest::collect_groups(reports_dir);
    let summary = summary::summarize(&groups);
    let markdown = render::to_markdown(&summary);

    let out_path = reports_dir.join(SUMMARY_FILE);
    render::write_summary(&out_path, &markdown)?;
    Ok(out_path)
}
