//! Configuration types for strata.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Naming strategy for migration file prefixes
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Naming {
    /// Zero-padded incrementing index (`0001_`, `0002_`, ...)
    #[default]
    Sequential,
    /// UTC seconds since the epoch
    Timestamp,
}

impl std::fmt::Display for Naming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Naming::Sequential => write!(f, "sequential"),
            Naming::Timestamp => write!(f, "timestamp"),
        }
    }
}

impl Naming {
    /// Parse a naming strategy from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sequential" | "index" => Some(Naming::Sequential),
            "timestamp" | "epoch" => Some(Naming::Timestamp),
            _ => None,
        }
    }
}

/// Main configuration struct for strata.toml
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StrataConfig {
    /// Naming strategy for migration file prefixes
    #[serde(default)]
    pub naming: Naming,
    /// Output directory for generated files
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

fn default_out() -> PathBuf {
    PathBuf::from("./strata")
}

impl Default for StrataConfig {
    fn default() -> Self {
        Self {
            naming: Naming::default(),
            out: default_out(),
        }
    }
}

impl StrataConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Get the migrations directory path
    pub fn migrations_dir(&self) -> PathBuf {
        self.out.join("migrations")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
