//! The query-compiler boundary.
//!
//! SELECT/INSERT/UPDATE/DELETE compilation lives outside this crate; the
//! DDL compiler only has to produce table and column names the query
//! compiler can target with matching, case-sensitive identifiers. The
//! contract is a single `compile` operation yielding SQL text plus
//! positional bind values.

use crate::executor::SQLiteValue;

/// A compiled statement: SQL text plus ordered bind parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,
    pub params: Vec<SQLiteValue>,
}

impl CompiledQuery {
    /// Create a compiled statement from SQL text and bind values.
    #[must_use]
    pub fn new(sql: impl Into<String>, params: Vec<SQLiteValue>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

/// Types that compile to a statement the executor can prepare.
pub trait Compile {
    fn compile(&self) -> CompiledQuery;
}
