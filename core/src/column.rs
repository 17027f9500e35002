//! Column descriptors and the builder handed to declaration callbacks.
//!
//! A [`ColumnDef`] describes exactly one column's DDL fragment: its storage
//! type, nullability, and an optional raw default expression. There is no
//! escape hatch for other constraints (UNIQUE, FOREIGN KEY, CHECK) by
//! design, which keeps the generated DDL fully predictable and reviewable
//! as plain text.

use std::borrow::Cow;

// =============================================================================
// Storage Types
// =============================================================================

/// SQLite storage type of a column.
///
/// This is a closed set: the builder only exposes these four factories, so
/// an unknown storage type is impossible by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Integer,
    Real,
    Blob,
}

impl ColumnType {
    /// The type keyword as rendered in DDL.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT",
            ColumnType::Integer => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Blob => "BLOB",
        }
    }
}

// =============================================================================
// Column Descriptor
// =============================================================================

/// An immutable description of one column's DDL fragment.
///
/// Setters return a new value with the field replaced, so chaining order
/// does not matter: `not_null` is sticky and for `default_value` the last
/// value wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Storage type, fixed at creation
    pub sql_type: ColumnType,
    /// Is this column NOT NULL?
    pub not_null: bool,
    /// Default value as a raw SQL literal/expression (if any)
    pub default: Option<Cow<'static, str>>,
}

impl ColumnDef {
    /// Create a new column descriptor of the given storage type.
    #[must_use]
    pub const fn new(sql_type: ColumnType) -> Self {
        Self {
            sql_type,
            not_null: false,
            default: None,
        }
    }

    /// Set NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Set the default value expression.
    ///
    /// The string is stored verbatim with no escaping or validation; the
    /// caller is responsible for correct SQL quoting (e.g. `"'draft'"` for
    /// a text default).
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Render this descriptor as a column-definition fragment:
    /// `"<name>" <TYPE>[ NOT NULL][ DEFAULT <expr>]`.
    #[must_use]
    pub fn render(&self, name: &str) -> String {
        let mut sql = format!("\"{}\" {}", name, self.sql_type.as_sql());
        if self.not_null {
            sql.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        sql
    }
}

// =============================================================================
// Column Builder
// =============================================================================

/// The factory handed to column-declaration callbacks.
///
/// One operation per supported storage type, each returning a fresh,
/// independent [`ColumnDef`] with nullability off and no default.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnBuilder;

impl ColumnBuilder {
    /// A TEXT column.
    #[must_use]
    pub const fn text(&self) -> ColumnDef {
        ColumnDef::new(ColumnType::Text)
    }

    /// An INTEGER column.
    #[must_use]
    pub const fn integer(&self) -> ColumnDef {
        ColumnDef::new(ColumnType::Integer)
    }

    /// A REAL column.
    #[must_use]
    pub const fn real(&self) -> ColumnDef {
        ColumnDef::new(ColumnType::Real)
    }

    /// A BLOB column.
    #[must_use]
    pub const fn blob(&self) -> ColumnDef {
        ColumnDef::new(ColumnType::Blob)
    }
}
