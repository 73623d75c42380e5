// src/bin/dupsum.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use dupsum_core::cli::{self, Cli};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();
    let out_path = cli::handle_summary()?;
    println!("Wrote {}", out_path.display());
    Ok(())
}
