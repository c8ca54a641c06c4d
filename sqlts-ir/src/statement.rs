//! Statement description types.

use serde::{Deserialize, Serialize};

/// How many rows a statement is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowCount {
    /// No rows; the caller is interested in the affected row count.
    Zero,
    /// Exactly one row.
    One,
    /// At most one row.
    ZeroOrOne,
    /// Any number of rows.
    Many,
}

impl RowCount {
    /// Get the serialized string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RowCount::Zero => "zero",
            RowCount::One => "one",
            RowCount::ZeroOrOne => "zeroOrOne",
            RowCount::Many => "many",
        }
    }
}

impl std::fmt::Display for RowCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed value: either a statement parameter or an output column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedValue {
    /// Parameter name (`$1` or a natural identifier) or column field name.
    pub name: String,
    /// Database type identifier, e.g. `int4` or `_text`.
    #[serde(rename = "type")]
    pub db_type: String,
    #[serde(default)]
    pub nullable: bool,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, db_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_type: db_type.into(),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Description of a single parameterized query.
///
/// Parameter and column order is significant: parameters bind in declaration
/// order and columns appear in that order in the generated row type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementDescription {
    /// Query text, embedded verbatim into generated code.
    #[serde(default)]
    pub sql: String,
    #[serde(default)]
    pub params: Vec<NamedValue>,
    #[serde(default)]
    pub columns: Vec<NamedValue>,
    pub row_count: RowCount,
}

impl StatementDescription {
    pub fn new(sql: impl Into<String>, row_count: RowCount) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
            columns: Vec::new(),
            row_count,
        }
    }

    /// Append a parameter.
    pub fn param(mut self, param: NamedValue) -> Self {
        self.params.push(param);
        self
    }

    /// Append an output column.
    pub fn column(mut self, column: NamedValue) -> Self {
        self.columns.push(column);
        self
    }

    /// Replace the query text, keeping the declared shape.
    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = sql.into();
        self
    }
}
