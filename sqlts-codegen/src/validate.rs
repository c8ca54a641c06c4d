//! Statement validation.

use std::collections::{BTreeSet, HashSet};

use sqlts_ir::StatementDescription;

use crate::ValidationError;

/// Check that a statement's output columns can form a record type.
///
/// Every duplicated column name is reported, once, in sorted order. A valid
/// statement is handed back untouched.
pub fn validate_statement(
    stmt: &StatementDescription,
) -> Result<&StatementDescription, ValidationError> {
    let mut seen = HashSet::new();
    let mut conflicts = BTreeSet::new();

    for column in &stmt.columns {
        if !seen.insert(column.name.as_str()) {
            conflicts.insert(column.name.as_str());
        }
    }

    if conflicts.is_empty() {
        Ok(stmt)
    } else {
        Err(ValidationError::DuplicateColumns(
            conflicts.into_iter().map(str::to_string).collect(),
        ))
    }
}
