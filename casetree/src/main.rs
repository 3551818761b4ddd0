#![warn(clippy::pedantic)]
//! casetree: export a test-management JSON dump as a tree of Markdown files.
//!
//! Reads `test-cases.json` from the working directory and writes the tree to
//! `test-cases/`. Set `RUST_LOG=debug` to see every file written.

use casetree::{CASETREE_VERSION, ExportConfig, run};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    let config = ExportConfig::default();
    info!(
        "casetree {CASETREE_VERSION}: '{}' -> '{}'",
        config.input.display(),
        config.output_root.display()
    );

    let stats = run(&config).with_context(|| format!("while exporting '{}'", config.input.display()))?;
    info!(
        "{} suites, {} cases, {} suite summaries written",
        stats.suites, stats.cases, stats.readmes
    );

    println!(
        "{} {} cases in {} suites written; see the '{}' directory.",
        "Conversion complete:".bright_green().bold(),
        stats.cases,
        stats.suites,
        config.output_root.display()
    );
    Ok(())
}
