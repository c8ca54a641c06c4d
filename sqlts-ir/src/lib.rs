//! Intermediate representation types for the sqlts generator.
//!
//! These types describe one introspected query and the modules generated
//! from it. They are produced outside of sqlts (by whatever tool inspected
//! the SQL against a database) and consumed read-only by the code generators.
//!
//! # Architecture
//!
//! ```text
//! introspection (JSON) → sqlts-ir (statement types) → codegen → .ts files
//! ```

mod module;
mod statement;

pub use module::{TsModule, TsModuleDir};
pub use statement::{NamedValue, RowCount, StatementDescription};
