//! Core utilities and types for the sqlts generator.
//!
//! This crate provides the generated-file abstraction and the naming
//! helpers shared by the code generators and the CLI.

mod file;
mod naming;

// File operations
pub use file::{FileStatus, GeneratedFile};
// String utilities
pub use naming::{file_stem, to_camel_case};
