//! Tracing utilities for strata DDL and query observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a debug-level tracing event with the table name and the number of
/// DDL statements compiled for it.
///
/// ```ignore
/// strata_trace_ddl!(&table_name, statements.len());
/// ```
#[macro_export]
macro_rules! strata_trace_ddl {
    ($table:expr, $statement_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(table = %$table, statements = $statement_count, "strata.ddl");
    };
}

/// Emit a debug-level tracing event with the SQL text and parameter count.
///
/// ```ignore
/// strata_trace_query!(&compiled.sql, compiled.params.len());
/// ```
#[macro_export]
macro_rules! strata_trace_query {
    ($sql:expr, $param_count:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %$sql, params = $param_count, "strata.query");
    };
}
