//! Bookkeeping for generated modules.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A generated TypeScript module and the function it exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsModule {
    /// The source the statement was read from.
    pub sql_file_name: String,
    pub ts_file_name: String,
    pub func_name: String,
}

impl TsModule {
    pub fn new(
        sql_file_name: impl Into<String>,
        ts_file_name: impl Into<String>,
        func_name: impl Into<String>,
    ) -> Self {
        Self {
            sql_file_name: sql_file_name.into(),
            ts_file_name: ts_file_name.into(),
            func_name: func_name.into(),
        }
    }
}

/// The generated modules of one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsModuleDir {
    pub dir_path: PathBuf,
    pub modules: Vec<TsModule>,
}

impl TsModuleDir {
    pub fn new(dir_path: impl Into<PathBuf>) -> Self {
        Self {
            dir_path: dir_path.into(),
            modules: Vec::new(),
        }
    }

    pub fn push(&mut self, module: TsModule) {
        self.modules.push(module);
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
