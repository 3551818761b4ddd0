//! Writes the suite tree to disk.
//!
//! Layout under the output root:
//! ```text
//! <Suite>/
//!   README.md            # only if the suite has a description or preconditions
//!   0001/case.mdx        # one numbered directory per case, restarting per suite
//!   0002/case.mdx
//!   <Child suite>/...
//! ```
//! The walk is depth first and strictly sequential. Existing files are
//! overwritten; nothing is removed. A failure stops the walk immediately and
//! leaves whatever was already written.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use casetree_data::{SuiteDef, TestDocument};
use log::{debug, info, warn};

use crate::config::ExportConfig;
use crate::error::ExportError;
use crate::loader::load_document;
use crate::render::{render_case, render_suite_readme};
use crate::sanitize::clean_segment;

pub const README_FILE: &str = "README.md";
pub const CASE_FILE: &str = "case.mdx";

/// Counts of what a run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub suites: usize,
    pub cases: usize,
    pub readmes: usize,
}

/// Load the configured input and write its tree under the configured root.
///
/// # Errors
/// Any read, decode, structural, or filesystem failure; see [`ExportError`].
pub fn run(config: &ExportConfig) -> Result<ExportStats, ExportError> {
    let doc = load_document(&config.input)?;
    export_document(&doc, config)
}

/// Write every top-level suite of `doc` under `config.output_root`.
///
/// # Errors
/// Stops at the first structural or filesystem failure.
pub fn export_document(doc: &TestDocument, config: &ExportConfig) -> Result<ExportStats, ExportError> {
    let mut materializer = Materializer::new(config);
    for suite in doc.suites() {
        if let Some(title) = suite.title.as_deref() {
            info!("exporting suite \"{title}\"");
        }
        materializer.materialize(suite, Path::new(""))?;
    }
    Ok(materializer.finish())
}

/// Depth-first writer for one export run.
pub struct Materializer<'a> {
    config: &'a ExportConfig,
    stats: ExportStats,
    /// Relative directories produced so far, for collision warnings.
    produced: HashSet<PathBuf>,
    depth: usize,
}

impl<'a> Materializer<'a> {
    pub fn new(config: &'a ExportConfig) -> Self {
        Self {
            config,
            stats: ExportStats::default(),
            produced: HashSet::new(),
            depth: 0,
        }
    }

    pub fn finish(self) -> ExportStats {
        self.stats
    }

    /// Write `suite` and everything below it. `parent` is relative to the
    /// output root and already sanitized; pass an empty path for top-level
    /// suites.
    ///
    /// # Errors
    /// A missing suite/case title, a malformed step or field, nesting beyond
    /// the configured depth, or a failed directory or file write.
    pub fn materialize(&mut self, suite: &SuiteDef, parent: &Path) -> Result<(), ExportError> {
        if self.depth >= self.config.max_depth {
            return Err(ExportError::structural(format!(
                "suites nested deeper than {} levels",
                self.config.max_depth
            ))
            .within(&location(parent)));
        }

        let title = suite
            .title
            .as_deref()
            .ok_or_else(|| ExportError::structural("suite has no `title`").within(&location(parent)))?;
        let segment = clean_segment(title);
        if segment.is_empty() {
            warn!("suite \"{title}\" has no usable name; writing into '{}'", location(parent));
        }
        let suite_path = parent.join(&segment);
        self.create_dir(&suite_path)?;
        self.stats.suites += 1;

        if suite.has_summary() {
            let readme = render_suite_readme(title, suite, &self.config.labels);
            self.write_file(&suite_path.join(README_FILE), &readme)?;
            self.stats.readmes += 1;
        }

        for (idx, case) in suite.cases().iter().enumerate() {
            let case_path = suite_path.join(format!("{:04}", idx + 1));
            self.create_dir(&case_path)?;
            let here = location(&case_path);
            let case_title = case
                .title
                .as_deref()
                .ok_or_else(|| ExportError::structural("case has no `title`").within(&here))?;
            let doc = render_case(case_title, case, &self.config.labels).map_err(|e| e.within(&here))?;
            self.write_file(&case_path.join(CASE_FILE), &doc)?;
            self.stats.cases += 1;
        }

        self.depth += 1;
        let result = suite
            .suites()
            .iter()
            .try_for_each(|child| self.materialize(child, &suite_path));
        self.depth -= 1;
        result
    }

    fn create_dir(&mut self, relative: &Path) -> Result<(), ExportError> {
        if !self.produced.insert(relative.to_path_buf()) {
            warn!(
                "'{}' was already produced in this run; contents will be merged",
                relative.display()
            );
        }
        let dir = self.config.output_root.join(relative);
        fs::create_dir_all(&dir).map_err(|e| ExportError::filesystem(&dir, e))?;
        debug!("created {}", dir.display());
        Ok(())
    }

    fn write_file(&self, relative: &Path, contents: &str) -> Result<(), ExportError> {
        let path = self.config.output_root.join(relative);
        fs::write(&path, contents).map_err(|e| ExportError::filesystem(&path, e))?;
        debug!("wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

fn location(relative: &Path) -> String {
    if relative.as_os_str().is_empty() {
        "<root>".to_string()
    } else {
        relative.display().to_string()
    }
}
