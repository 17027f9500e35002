//! # strata
//!
//! A declarative schema DSL that compiles table descriptions into
//! deterministic SQLite DDL, plus the migration scaffolding around it.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let place = define_table(
//!     "Place",
//!     |c| {
//!         vec![
//!             ("name", c.text().not_null()),
//!             ("status", c.text().not_null().default_value("'draft'")),
//!             ("cityId", c.integer()),
//!         ]
//!     },
//!     TableOptions::default(),
//! );
//!
//! assert!(place.sql[0].starts_with("CREATE TABLE \"Place\""));
//!
//! let idx = create_index(
//!     &place.table_ref(),
//!     &["status", "cityId"],
//!     IndexOptions::default(),
//! );
//! assert_eq!(
//!     idx,
//!     r#"CREATE INDEX "Place_status_cityId_idx" ON "Place"("status", "cityId");"#
//! );
//! ```
//!
//! The compiler never talks to a database: every operation is a pure
//! function returning statement text, and the executor side is a boundary
//! trait (see [`strata_core::executor`]).

// =============================================================================
// Root-level exports
// =============================================================================

pub use strata_core::{
    ColumnBuilder, ColumnDef, ColumnType, Compile, CompiledQuery, Executor, IndexOptions,
    Result, Row, RunMeta, RunResult, SQLiteValue, Statement, StrataError, Table, TableOptions,
    TableRef, add_column, create_index, define_table, drop_index, drop_table, trigger_name,
};

pub use strata_migrations as migrations;

/// Everything needed to declare schemas and generate statements.
pub mod prelude {
    pub use strata_core::{
        ColumnBuilder, ColumnDef, ColumnType, IndexOptions, Table, TableOptions, TableRef,
        add_column, create_index, define_table, drop_index, drop_table,
    };
    pub use strata_migrations::{MigrationWriter, StrataConfig};
}
