//! The statement-executor boundary.
//!
//! strata does not connect to or execute against a live database; this
//! module only specifies the contract a runtime executor must satisfy to
//! consume the compiler's output (SQL text plus bind parameters). The
//! mutation-result shape mirrors what single-file SQLite services report.

use serde::{Deserialize, Serialize};

use crate::error::Result;

// =============================================================================
// Values and Rows
// =============================================================================

/// An owned SQLite value used as a bind parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum SQLiteValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<i32> for SQLiteValue {
    fn from(value: i32) -> Self {
        SQLiteValue::Integer(value as i64)
    }
}

impl From<i64> for SQLiteValue {
    fn from(value: i64) -> Self {
        SQLiteValue::Integer(value)
    }
}

impl From<f64> for SQLiteValue {
    fn from(value: f64) -> Self {
        SQLiteValue::Real(value)
    }
}

impl From<bool> for SQLiteValue {
    fn from(value: bool) -> Self {
        SQLiteValue::Integer(value as i64)
    }
}

impl From<&str> for SQLiteValue {
    fn from(value: &str) -> Self {
        SQLiteValue::Text(value.to_string())
    }
}

impl From<String> for SQLiteValue {
    fn from(value: String) -> Self {
        SQLiteValue::Text(value)
    }
}

impl From<Vec<u8>> for SQLiteValue {
    fn from(value: Vec<u8>) -> Self {
        SQLiteValue::Blob(value)
    }
}

impl<T: Into<SQLiteValue>> From<Option<T>> for SQLiteValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SQLiteValue::Null,
        }
    }
}

/// One result row, keyed by column name.
pub type Row = serde_json::Map<String, serde_json::Value>;

// =============================================================================
// Mutation Results
// =============================================================================

/// Execution metadata reported for a mutation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct RunMeta {
    /// Wall-clock duration in milliseconds
    pub duration: f64,
    pub rows_read: u64,
    pub rows_written: u64,
    pub last_row_id: i64,
    /// Did the statement change the database?
    pub changed_db: bool,
    pub changes: u64,
}

/// Result record returned by [`Statement::run`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RunResult {
    pub success: bool,
    pub meta: RunMeta,
}

// =============================================================================
// Executor Traits
// =============================================================================

/// A prepared statement with positional bind parameters.
pub trait Statement: Sized {
    /// Bind positional parameter values, returning the statement for
    /// chaining.
    #[must_use]
    fn bind(self, values: Vec<SQLiteValue>) -> Self;

    /// Execute and return all rows.
    fn all(&self) -> Result<Vec<Row>>;

    /// Execute and return the first row, or `None` when the result set is
    /// empty.
    fn first(&self) -> Result<Option<Row>>;

    /// Execute as a mutation.
    fn run(&self) -> Result<RunResult>;
}

/// A statement executor: the sole consumer of the compiler's output.
pub trait Executor {
    type Statement: Statement;

    /// Prepare a statement from SQL text.
    fn prepare(&self, sql: &str) -> Result<Self::Statement>;

    /// Execute a list of bound statements, returning one result per
    /// statement.
    fn batch(&self, statements: Vec<Self::Statement>) -> Result<Vec<RunResult>>;
}
