//! Core operations.
//!
//! This module contains the business logic for sqlts commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod load;

pub use generate::{Failure, GenerateOptions, generate_dir};
