//! Migration file writer

use crate::config::Naming;
use strata_core::Table;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Writes compiled statement lists into prefixed `.sql` migration files.
pub struct MigrationWriter {
    /// Output directory for migrations
    out: PathBuf,
    /// Naming strategy for file prefixes
    naming: Naming,
}

impl MigrationWriter {
    /// Create a new migration writer with the given settings
    pub fn new(out: impl Into<PathBuf>, naming: Naming) -> Self {
        Self {
            out: out.into(),
            naming,
        }
    }

    /// Get the migrations directory path
    pub fn migrations_dir(&self) -> &Path {
        &self.out
    }

    /// Ensure the migrations directory exists
    pub fn ensure_dirs(&self) -> io::Result<()> {
        fs::create_dir_all(&self.out)
    }

    /// Get the path to a migration SQL file
    pub fn migration_path(&self, tag: &str) -> PathBuf {
        self.out.join(format!("{tag}.sql"))
    }

    /// List migration file names (without extension), lexicographically
    /// sorted. Both prefix schemes sort chronologically under this order.
    pub fn list_migrations(&self) -> io::Result<Vec<String>> {
        let mut tags = Vec::new();
        if !self.out.exists() {
            return Ok(tags);
        }
        for entry in fs::read_dir(&self.out)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "sql")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                tags.push(stem.to_string());
            }
        }
        tags.sort();
        Ok(tags)
    }

    /// Generate the prefix for the next migration file.
    ///
    /// Sequential naming scans existing files for the highest leading
    /// index; timestamp naming uses UTC seconds since the epoch.
    pub fn next_prefix(&self) -> Result<String, MigrationError> {
        match self.naming {
            Naming::Sequential => {
                let next = self
                    .list_migrations()
                    .map_err(|e| MigrationError::IoError(e.to_string()))?
                    .iter()
                    .filter_map(|tag| {
                        tag.split('_')
                            .next()
                            .and_then(|prefix| prefix.parse::<u32>().ok())
                    })
                    .max()
                    .unwrap_or(0)
                    + 1;
                Ok(format!("{next:04}"))
            }
            Naming::Timestamp => {
                let now = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map_err(|e| MigrationError::IoError(e.to_string()))?;
                Ok(now.as_secs().to_string())
            }
        }
    }

    /// Write a migration file from a list of compiled statements.
    ///
    /// Statements are joined with a single newline and written verbatim;
    /// returns the path of the created file.
    pub fn write_migration(
        &self,
        name: &str,
        statements: &[String],
    ) -> Result<PathBuf, MigrationError> {
        if statements.is_empty() {
            return Err(MigrationError::Empty);
        }

        self.ensure_dirs()
            .map_err(|e| MigrationError::IoError(e.to_string()))?;

        let tag = format!("{}_{}", self.next_prefix()?, name);
        let path = self.migration_path(&tag);
        fs::write(&path, statements.join("\n"))
            .map_err(|e| MigrationError::IoError(e.to_string()))?;

        Ok(path)
    }

    /// Write a compiled table declaration as a migration named
    /// `create_<table>`.
    pub fn write_table(&self, table: &Table) -> Result<PathBuf, MigrationError> {
        let name = format!("create_{}", table.name());
        self.write_migration(&name, &table.sql)
    }
}

/// Migration errors
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("No statements to write")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{TableOptions, define_table};

    #[test]
    fn test_sequential_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MigrationWriter::new(dir.path(), Naming::Sequential);

        let first = writer
            .write_migration("create_place", &["CREATE TABLE \"Place\" (\n);".to_string()])
            .unwrap();
        let second = writer
            .write_migration("add_featured", &["ALTER TABLE x;".to_string()])
            .unwrap();

        assert!(first.ends_with("0001_create_place.sql"));
        assert!(second.ends_with("0002_add_featured.sql"));
    }

    #[test]
    fn test_statements_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MigrationWriter::new(dir.path(), Naming::Sequential);

        let statements = vec!["DROP TABLE \"Place\";".to_string(),
            "DROP TRIGGER IF EXISTS \"Place_updatedAt_trg\";".to_string()];
        let path = writer.write_migration("drop_place", &statements).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert_eq!(
            written,
            "DROP TABLE \"Place\";\nDROP TRIGGER IF EXISTS \"Place_updatedAt_trg\";"
        );
    }

    #[test]
    fn test_empty_statement_list_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MigrationWriter::new(dir.path(), Naming::Sequential);

        assert!(matches!(
            writer.write_migration("noop", &[]),
            Err(MigrationError::Empty)
        ));
    }

    #[test]
    fn test_write_table_declaration() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MigrationWriter::new(dir.path(), Naming::Sequential);

        let place = define_table("Place", |c| vec![("name", c.text())], TableOptions::default());
        let path = writer.write_table(&place).unwrap();

        assert!(path.ends_with("0001_create_Place.sql"));
        let written = fs::read_to_string(path).unwrap();
        assert!(written.starts_with("CREATE TABLE \"Place\" (\n"));
        assert!(written.contains("CREATE TRIGGER \"Place_updatedAt_trg\""));
    }

    #[test]
    fn test_list_migrations_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MigrationWriter::new(dir.path(), Naming::Sequential);

        writer.write_migration("b", &["-- b".to_string()]).unwrap();
        writer.write_migration("a", &["-- a".to_string()]).unwrap();

        assert_eq!(writer.list_migrations().unwrap(), vec!["0001_b", "0002_a"]);
    }

    #[test]
    fn test_timestamp_prefix_is_numeric() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MigrationWriter::new(dir.path(), Naming::Timestamp);

        let prefix = writer.next_prefix().unwrap();
        assert!(prefix.parse::<u64>().unwrap() > 1_700_000_000);
    }
}
