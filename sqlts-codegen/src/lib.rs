//! Shared code generation utilities for the sqlts generator.
//!
//! This crate provides the language-agnostic half of the pipeline; the
//! target-language generators (e.g., `sqlts-codegen-typescript`) build on it.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`validate`] - Statement validation before generation
//! - [`convention`] - Positional vs. named parameter classification
//! - [`resolver`] - The asynchronous type resolution interface
//! - [`error`] - Error taxonomy shared by every stage

pub mod builder;
pub mod convention;
pub mod error;
pub mod resolver;
pub mod validate;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use convention::{ParamConvention, is_positional_name};
pub use error::{Error, ResolveError, Result, ValidationError};
pub use resolver::{ResolvedColumn, TypeResolver};
pub use validate::validate_statement;
