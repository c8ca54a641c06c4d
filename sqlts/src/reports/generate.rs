//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::ops::Failure;

/// A file in dry-run mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// Report data from code generation.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub dry_run: bool,
    /// Files written to disk.
    pub written: Vec<PathBuf>,
    /// Files that would be written.
    pub previews: Vec<PreviewFile>,
    /// Statements that were skipped.
    pub failures: Vec<Failure>,
}

impl GenerateReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    pub fn preview(&mut self, path: PathBuf, content: String) {
        self.previews.push(PreviewFile { path, content });
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for failure in &self.failures {
            out.error(&format!("{}: {}", failure.path.display(), failure.message));
        }

        if self.dry_run {
            for file in &self.previews {
                out.divider(&file.path.display().to_string());
                out.preformatted(file.content.trim_end());
                out.newline();
            }
            out.preformatted(&format!(
                "Dry run: {} file(s) not written",
                self.previews.len()
            ));
            return;
        }

        if !self.written.is_empty() {
            out.section(&format!("Generated ({})", self.written.len()));
            for path in &self.written {
                out.added_item(&path.display().to_string());
            }
        }

        if !self.failures.is_empty() {
            out.newline();
            out.preformatted(&format!("{} statement(s) failed", self.failures.len()));
        }
    }
}
