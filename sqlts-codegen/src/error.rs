//! Errors raised while validating statements and generating code.

use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

/// A statement whose shape cannot be turned into a wrapper function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Output column names that occur more than once, sorted and deduplicated.
    #[error("Duplicate output columns: {}", .0.join(", "))]
    DuplicateColumns(Vec<String>),
}

/// A database type that could not be mapped to a target-language type.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown database type '{0}'")]
    UnknownType(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Any failure of the validate-then-generate pipeline for one statement.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
