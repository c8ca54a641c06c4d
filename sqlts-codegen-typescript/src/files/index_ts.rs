//! index.ts barrel generator.

use std::path::{Path, PathBuf};

use sqlts_core::GeneratedFile;
use sqlts_ir::TsModule;

use crate::index::generate_index;

/// The `index.ts` of a directory of generated query modules.
pub struct IndexTs {
    modules: Vec<TsModule>,
}

impl IndexTs {
    pub fn new(modules: Vec<TsModule>) -> Self {
        Self { modules }
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("index.ts")
    }

    fn render(&self) -> String {
        let mut content = generate_index(&self.modules);
        if !content.is_empty() {
            content.push('\n');
        }
        content
    }
}
