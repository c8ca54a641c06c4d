//! The type resolution interface consumed by the generators.
//!
//! Resolution is asynchronous because a resolver may need to consult a live
//! database catalog (e.g. to look up enum or domain types). Any failure is
//! final for the statement being generated.

use async_trait::async_trait;
use sqlts_ir::NamedValue;

use crate::ResolveError;

/// A column name paired with its resolved target-language type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub name: String,
    pub ty: String,
}

impl ResolvedColumn {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Maps database types to target-language type expressions.
#[async_trait]
pub trait TypeResolver: Send + Sync {
    /// Type expression for a parameter of `db_type`.
    ///
    /// Nullable types must include an explicit absent variant (`T | null`).
    async fn param_type(&self, db_type: &str, nullable: bool) -> Result<String, ResolveError>;

    /// Type expression for an output column, keeping the column name.
    async fn column_type(&self, column: &NamedValue) -> Result<ResolvedColumn, ResolveError> {
        let ty = self.param_type(&column.db_type, column.nullable).await?;
        Ok(ResolvedColumn::new(column.name.clone(), ty))
    }
}
