//! strata-migrations - Migration scaffolding for strata
//!
//! This crate provides the pieces around the DDL compiler:
//! - Configuration loading from `strata.toml` (naming strategy + paths)
//! - A migration file writer that turns compiled statement lists into
//!   prefixed `.sql` files
//!
//! Statements are concatenated verbatim; nothing here rewrites the SQL
//! text the compiler produced.

pub mod config;
pub mod writer;

pub use config::{ConfigError, Naming, StrataConfig};
pub use writer::{MigrationError, MigrationWriter};
