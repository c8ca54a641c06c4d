//! `sqlts.toml` configuration.
//!
//! ```toml
//! [generate]
//! module = "pg"
//! index = true
//!
//! [types]
//! citext = "string"
//! ```
//!
//! Every key is optional.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;

use indexmap::IndexMap;
pub use error::{Error, Result};
pub use file::SqltsToml;
pub use parse::parse_config;
use serde::Deserialize;

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "sqlts.toml";

/// Root schema for sqlts.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,

    /// Database type to TypeScript type overrides, in file order.
    #[serde(default)]
    pub types: IndexMap<String, String>,
}

/// The `[generate]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    /// Module the `ClientBase` type is imported from.
    #[serde(default = "default_module")]
    pub module: String,

    /// Write an `index.ts` re-exporting every function of a directory.
    #[serde(default = "default_index")]
    pub index: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            module: default_module(),
            index: default_index(),
        }
    }
}

fn default_module() -> String {
    "pg".to_string()
}

fn default_index() -> bool {
    true
}
