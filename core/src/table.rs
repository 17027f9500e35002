//! The table compiler: declarative table descriptions to `CREATE TABLE`
//! (and, conditionally, `CREATE TRIGGER`) statement text.

use std::borrow::Cow;
use std::marker::PhantomData;

use crate::column::{ColumnBuilder, ColumnDef};
use crate::strata_trace_ddl;

// =============================================================================
// Table Options
// =============================================================================

/// Configuration controlling the auto-generated columns of a table.
///
/// All three auto-columns are enabled by default; each can be disabled and
/// renamed independently. Disabling the updatedAt column suppresses both
/// the column and its maintenance trigger. Disabling the surrogate key
/// does not suppress the trigger: its correlating column falls back to the
/// first user-declared column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    /// Include the surrogate-key column?
    pub id: bool,
    /// Include the creation-timestamp column?
    pub created_at: bool,
    /// Include the update-timestamp column (and its trigger)?
    pub updated_at: bool,
    /// Surrogate-key column name
    pub id_column: Cow<'static, str>,
    /// Creation-timestamp column name
    pub created_at_column: Cow<'static, str>,
    /// Update-timestamp column name
    pub updated_at_column: Cow<'static, str>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            id: true,
            created_at: true,
            updated_at: true,
            id_column: Cow::Borrowed("id"),
            created_at_column: Cow::Borrowed("createdAt"),
            updated_at_column: Cow::Borrowed("updatedAt"),
        }
    }
}

impl TableOptions {
    /// Disable the surrogate-key column.
    #[must_use]
    pub fn without_id(mut self) -> Self {
        self.id = false;
        self
    }

    /// Disable the creation-timestamp column.
    #[must_use]
    pub fn without_created_at(mut self) -> Self {
        self.created_at = false;
        self
    }

    /// Disable the update-timestamp column and its trigger.
    #[must_use]
    pub fn without_updated_at(mut self) -> Self {
        self.updated_at = false;
        self
    }

    /// Override the surrogate-key column name.
    #[must_use]
    pub fn id_column(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.id_column = name.into();
        self
    }

    /// Override the creation-timestamp column name.
    #[must_use]
    pub fn created_at_column(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.created_at_column = name.into();
        self
    }

    /// Override the update-timestamp column name.
    #[must_use]
    pub fn updated_at_column(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.updated_at_column = name.into();
        self
    }
}

// =============================================================================
// Table Declaration and Reference
// =============================================================================

/// The compiled result of a [`define_table`] call: the table name plus the
/// ordered DDL statements. A value, not a live handle; immutable once
/// compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    /// Table name, used verbatim and case-sensitively in all identifiers
    pub name: Cow<'static, str>,
    /// Ordered statements: `CREATE TABLE` first, then the trigger (if any)
    pub sql: Vec<String>,
}

impl Table {
    /// Get the table name as a string slice.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A lightweight reference to this table for later statements.
    #[must_use]
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(self.name.clone())
    }
}

/// A minimal named pointer to a table declared elsewhere.
///
/// Carries only the table name at runtime; the `S` parameter tracks the
/// table's column shape at compile time and has no runtime representation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRef<S = ()> {
    /// Table name
    pub name: Cow<'static, str>,
    _shape: PhantomData<S>,
}

impl<S> TableRef<S> {
    /// Create a reference from a bare table name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            _shape: PhantomData,
        }
    }

    /// Get the table name as a string slice.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&Table> for TableRef {
    fn from(table: &Table) -> Self {
        table.table_ref()
    }
}

// =============================================================================
// Table Compiler
// =============================================================================

/// Synthesize the maintenance-trigger name for a table's updatedAt column.
///
/// Shared by [`define_table`] and [`crate::statements::drop_table`] so that
/// create and drop stay consistent for the same logical table.
#[must_use]
pub fn trigger_name(table: &str, updated_at_column: &str) -> String {
    format!("{table}_{updated_at_column}_trg")
}

/// Compile a table declaration into its DDL statements.
///
/// The callback receives the column factory and returns the user columns as
/// `(name, descriptor)` pairs; their order determines rendering order. The
/// first emitted statement is always the `CREATE TABLE`; if the updatedAt
/// column is enabled and a correlating column exists (the surrogate key,
/// or else the first user column), a second statement keeps that column
/// current via an `AFTER UPDATE` row-level trigger. With the surrogate key
/// disabled and no user columns declared, no trigger is emitted.
///
/// Declaring no columns at all while disabling every auto-column yields
/// syntactically invalid DDL; declaring at least one column in that case
/// is the caller's responsibility, not a checked precondition.
///
/// ```rust
/// use strata_core::{define_table, TableOptions};
///
/// let place = define_table(
///     "Place",
///     |c| vec![("name", c.text().not_null()), ("cityId", c.integer())],
///     TableOptions::default(),
/// );
/// assert!(place.sql[0].starts_with("CREATE TABLE \"Place\""));
/// ```
pub fn define_table<S, F>(
    name: impl Into<Cow<'static, str>>,
    columns: F,
    options: TableOptions,
) -> Table
where
    S: Into<Cow<'static, str>>,
    F: FnOnce(&ColumnBuilder) -> Vec<(S, ColumnDef)>,
{
    let name = name.into();
    let builder = ColumnBuilder;
    let user_columns: Vec<(Cow<'static, str>, ColumnDef)> = columns(&builder)
        .into_iter()
        .map(|(n, c)| (n.into(), c))
        .collect();

    let mut lines = Vec::with_capacity(user_columns.len() + 3);
    if options.id {
        lines.push(format!(
            "\"{}\" INTEGER PRIMARY KEY AUTOINCREMENT",
            options.id_column
        ));
    }
    for (col_name, col) in &user_columns {
        lines.push(col.render(col_name));
    }
    if options.created_at {
        lines.push(timestamp_column(&options.created_at_column));
    }
    if options.updated_at {
        lines.push(timestamp_column(&options.updated_at_column));
    }

    let body = lines
        .iter()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join(",\n");
    let mut sql = vec![format!("CREATE TABLE \"{name}\" (\n{body}\n);")];

    if options.updated_at {
        let correlating = if options.id {
            Some(options.id_column.as_ref())
        } else {
            user_columns.first().map(|(n, _)| n.as_ref())
        };
        if let Some(correlating) = correlating {
            sql.push(update_trigger(
                &name,
                &options.updated_at_column,
                correlating,
            ));
        }
    }

    strata_trace_ddl!(&name, sql.len());
    Table { name, sql }
}

/// Render a timestamp auto-column. Both createdAt and updatedAt use the
/// identical definition.
fn timestamp_column(name: &str) -> String {
    format!("\"{name}\" TEXT NOT NULL DEFAULT (datetime('now'))")
}

/// Render the updatedAt maintenance trigger.
fn update_trigger(table: &str, updated_at: &str, correlating: &str) -> String {
    format!(
        "CREATE TRIGGER \"{trigger}\"\n\
         AFTER UPDATE ON \"{table}\"\n\
         FOR EACH ROW\n\
         BEGIN\n  \
         UPDATE \"{table}\" SET \"{updated_at}\" = datetime('now') \
         WHERE \"{correlating}\" = NEW.\"{correlating}\";\n\
         END;",
        trigger = trigger_name(table, updated_at),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_golden() {
        let place = define_table(
            "Place",
            |c| vec![("name", c.text().not_null()), ("cityId", c.integer())],
            TableOptions::default(),
        );

        assert_eq!(
            place.sql[0],
            "CREATE TABLE \"Place\" (\n\
             \x20 \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,\n\
             \x20 \"name\" TEXT NOT NULL,\n\
             \x20 \"cityId\" INTEGER,\n\
             \x20 \"createdAt\" TEXT NOT NULL DEFAULT (datetime('now')),\n\
             \x20 \"updatedAt\" TEXT NOT NULL DEFAULT (datetime('now'))\n\
             );"
        );
    }

    #[test]
    fn test_trigger_golden() {
        let place = define_table(
            "Place",
            |c| vec![("name", c.text().not_null())],
            TableOptions::default(),
        );

        assert_eq!(place.sql.len(), 2);
        assert_eq!(
            place.sql[1],
            "CREATE TRIGGER \"Place_updatedAt_trg\"\n\
             AFTER UPDATE ON \"Place\"\n\
             FOR EACH ROW\n\
             BEGIN\n\
             \x20 UPDATE \"Place\" SET \"updatedAt\" = datetime('now') \
             WHERE \"id\" = NEW.\"id\";\n\
             END;"
        );
    }

    #[test]
    fn test_without_updated_at_removes_column_and_trigger() {
        let table = define_table(
            "Place",
            |c| vec![("name", c.text())],
            TableOptions::default().without_updated_at(),
        );

        assert_eq!(table.sql.len(), 1);
        assert!(!table.sql[0].contains("updatedAt"));
    }

    #[test]
    fn test_without_id_trigger_correlates_first_user_column() {
        let table = define_table(
            "Place",
            |c| vec![("slug", c.text().not_null()), ("name", c.text())],
            TableOptions::default().without_id(),
        );

        assert_eq!(table.sql.len(), 2);
        assert!(!table.sql[0].contains("AUTOINCREMENT"));
        assert!(table.sql[1].contains("WHERE \"slug\" = NEW.\"slug\""));
    }

    #[test]
    fn test_no_correlating_column_skips_trigger() {
        // No surrogate key and no user columns: no trigger at all.
        let table = define_table(
            "Marker",
            |_| Vec::<(&str, ColumnDef)>::new(),
            TableOptions::default().without_id(),
        );

        assert_eq!(table.sql.len(), 1);
        assert!(table.sql[0].contains("\"createdAt\""));
    }

    #[test]
    fn test_custom_column_names_propagate() {
        let table = define_table(
            "Place",
            |c| vec![("name", c.text())],
            TableOptions::default()
                .id_column("place_id")
                .created_at_column("created_at")
                .updated_at_column("updated_at"),
        );

        assert!(table.sql[0].contains("\"place_id\" INTEGER PRIMARY KEY AUTOINCREMENT"));
        assert!(table.sql[0].contains("\"created_at\" TEXT NOT NULL"));
        assert!(table.sql[0].contains("\"updated_at\" TEXT NOT NULL"));
        assert!(table.sql[1].contains("\"Place_updated_at_trg\""));
        assert!(
            table.sql[1].contains("SET \"updated_at\" = datetime('now') \
                 WHERE \"place_id\" = NEW.\"place_id\"")
        );
    }

    #[test]
    fn test_column_order_is_declaration_order() {
        let table = define_table(
            "T",
            |c| {
                vec![
                    ("b", c.integer()),
                    ("a", c.text()),
                    ("z", c.real()),
                ]
            },
            TableOptions::default(),
        );

        let sql = &table.sql[0];
        let b = sql.find("\"b\"").unwrap();
        let a = sql.find("\"a\"").unwrap();
        let z = sql.find("\"z\"").unwrap();
        assert!(b < a && a < z);
    }

    #[test]
    fn test_table_ref_from_declaration() {
        let table = define_table("Place", |c| vec![("name", c.text())], TableOptions::default());
        let table_ref = table.table_ref();
        assert_eq!(table_ref.name(), "Place");

        let bare: TableRef = TableRef::new("City");
        assert_eq!(bare.name(), "City");
    }

    #[test]
    fn test_all_auto_columns_disabled() {
        let table = define_table(
            "Plain",
            |c| vec![("key", c.text().not_null())],
            TableOptions::default()
                .without_id()
                .without_created_at()
                .without_updated_at(),
        );

        assert_eq!(
            table.sql,
            vec!["CREATE TABLE \"Plain\" (\n  \"key\" TEXT NOT NULL\n);".to_string()]
        );
    }
}
