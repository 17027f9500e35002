//! strata CLI - Command-line interface for strata migrations
//!
//! File and directory scaffolding around the DDL compiler: project
//! initialization, prefixed migration file creation, and status listing.

pub mod error;
pub mod output;
