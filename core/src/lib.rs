//! # strata-core
//!
//! A declarative schema DSL that compiles table descriptions into
//! deterministic SQLite DDL text.
//!
//! Every public operation is a pure function of its inputs and returns
//! either a single SQL statement string or an ordered list of statement
//! strings. Statements always terminate with `;` and always double-quote
//! identifiers, so downstream tooling can concatenate them verbatim into
//! `.sql` migration files.
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_core::{define_table, create_index, IndexOptions, TableOptions};
//!
//! let place = define_table(
//!     "Place",
//!     |c| vec![("name", c.text().not_null()), ("cityId", c.integer())],
//!     TableOptions::default(),
//! );
//!
//! // place.sql[0] is the CREATE TABLE statement,
//! // place.sql[1] the updatedAt maintenance trigger.
//! assert_eq!(place.sql.len(), 2);
//!
//! let idx = create_index(&place.table_ref(), &["cityId"], IndexOptions::default());
//! assert_eq!(idx, r#"CREATE INDEX "Place_cityId_idx" ON "Place"("cityId");"#);
//! ```

pub mod column;
pub mod error;
pub mod executor;
pub mod query;
pub mod statements;
pub mod table;
pub mod tracing;

// Re-export key types and operations
pub use column::{ColumnBuilder, ColumnDef, ColumnType};
pub use error::{Result, StrataError};
pub use executor::{Executor, Row, RunMeta, RunResult, SQLiteValue, Statement};
pub use query::{Compile, CompiledQuery};
pub use statements::{IndexOptions, add_column, create_index, drop_index, drop_table};
pub use table::{Table, TableOptions, TableRef, define_table, trigger_name};
