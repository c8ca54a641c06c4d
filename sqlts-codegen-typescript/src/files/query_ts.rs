//! A generated query function module.

use std::path::{Path, PathBuf};

use sqlts_core::GeneratedFile;

/// `<stem>.ts` holding one generated query function.
///
/// The content is produced by [`generate_function`](crate::generate_function)
/// beforehand, since generation is asynchronous.
pub struct QueryTs {
    stem: String,
    content: String,
}

impl QueryTs {
    pub fn new(stem: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.ts", self.stem)
    }
}

impl GeneratedFile for QueryTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
