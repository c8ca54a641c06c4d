use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file.
///
/// Generated files are always overwritten: they are a function of their
/// inputs and never hold user edits.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, returning the path written.
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }

    /// Compare the file on disk against the rendered content.
    fn status(&self, base: &Path) -> Result<FileStatus> {
        let path = self.path(base);
        if !path.exists() {
            return Ok(FileStatus::Missing);
        }

        let existing = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        if existing == self.render() {
            Ok(FileStatus::UpToDate)
        } else {
            Ok(FileStatus::Stale)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// State of a generated file on disk relative to freshly rendered content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// File does not exist
    Missing,
    /// File exists with different content
    Stale,
    /// File matches the rendered content
    UpToDate,
}
