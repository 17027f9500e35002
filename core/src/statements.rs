//! Single-statement DDL generators for indexes, column additions, and
//! table drops.
//!
//! All generators are pure, side-effect-free string builders following the
//! same naming conventions as the table compiler. None validate that the
//! referenced table or columns exist; correctness is the caller's
//! responsibility.

use std::borrow::Cow;

use crate::column::{ColumnBuilder, ColumnDef};
use crate::table::{TableRef, trigger_name};

// =============================================================================
// Index Options
// =============================================================================

/// Options for [`create_index`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Create a UNIQUE index?
    pub unique: bool,
    /// Explicit index name, overriding synthesis entirely
    pub name: Option<Cow<'static, str>>,
}

impl IndexOptions {
    /// Make the index UNIQUE.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set an explicit index name.
    #[must_use]
    pub fn name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// =============================================================================
// Statement Generators
// =============================================================================

/// Emit a `CREATE [UNIQUE ]INDEX` statement.
///
/// The default index name is `<table>_<col1>_<col2>..._idx`, with suffix
/// `uq` for unique indexes; an explicit name in `options` overrides
/// synthesis entirely.
///
/// ```rust
/// use strata_core::{create_index, IndexOptions, TableRef};
///
/// let place: TableRef = TableRef::new("Place");
/// assert_eq!(
///     create_index(&place, &["status", "cityId"], IndexOptions::default()),
///     r#"CREATE INDEX "Place_status_cityId_idx" ON "Place"("status", "cityId");"#
/// );
/// ```
#[must_use]
pub fn create_index<S>(table: &TableRef<S>, columns: &[&str], options: IndexOptions) -> String {
    let name = match options.name {
        Some(name) => name.into_owned(),
        None => {
            let suffix = if options.unique { "uq" } else { "idx" };
            format!("{}_{}_{}", table.name(), columns.join("_"), suffix)
        }
    };
    let unique = if options.unique { "UNIQUE " } else { "" };
    let cols = columns
        .iter()
        .map(|col| format!("\"{col}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE {unique}INDEX \"{name}\" ON \"{table}\"({cols});",
        table = table.name(),
    )
}

/// Emit a `DROP INDEX` statement for a literal index name.
///
/// No existence check and no `IF EXISTS`; callers wanting idempotent drops
/// must add that semantics themselves.
#[must_use]
pub fn drop_index(name: &str) -> String {
    format!("DROP INDEX \"{name}\";")
}

/// Emit an `ALTER TABLE ... ADD COLUMN` statement.
///
/// The callback receives the same column factory as [`crate::define_table`]
/// and the fragment renders under the same NOT NULL / DEFAULT rules.
///
/// ```rust
/// use strata_core::{add_column, TableRef};
///
/// let place: TableRef = TableRef::new("Place");
/// assert_eq!(
///     add_column(&place, "featured", |c| c.integer().not_null().default_value("0")),
///     r#"ALTER TABLE "Place" ADD COLUMN "featured" INTEGER NOT NULL DEFAULT 0;"#
/// );
/// ```
#[must_use]
pub fn add_column<S, F>(table: &TableRef<S>, name: &str, column: F) -> String
where
    F: FnOnce(&ColumnBuilder) -> ColumnDef,
{
    let def = column(&ColumnBuilder);
    format!(
        "ALTER TABLE \"{table}\" ADD COLUMN {fragment};",
        table = table.name(),
        fragment = def.render(name),
    )
}

/// Emit the two statements dropping a table and its updatedAt trigger, in
/// that order.
///
/// `updated_at_column` must match the name the table was declared with;
/// it defaults to `updatedAt`. The trigger drop uses `IF EXISTS` because
/// the caller cannot always know whether a trigger was ever created.
#[must_use]
pub fn drop_table<S>(table: &TableRef<S>, updated_at_column: Option<&str>) -> Vec<String> {
    let updated_at = updated_at_column.unwrap_or("updatedAt");
    vec![
        format!("DROP TABLE \"{}\";", table.name()),
        format!(
            "DROP TRIGGER IF EXISTS \"{}\";",
            trigger_name(table.name(), updated_at)
        ),
    ]
}
