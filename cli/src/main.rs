//! strata CLI - Main entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use strata_cli::error::CliError;
use strata_cli::output;
use strata_migrations::{MigrationWriter, StrataConfig};

/// Default configuration file name
const DEFAULT_CONFIG_FILE: &str = "strata.toml";

/// strata - SQLite schema and migration CLI
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about = "SQLite schema and migration CLI for strata", long_about = None)]
struct Cli {
    /// Path to config file (default: strata.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Create a strata.toml and the migrations directory
    Init,

    /// Create a new, empty migration file
    New {
        /// Migration name (appended to the generated prefix)
        name: String,
    },

    /// List migration files in order
    Status,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let result = match cli.command {
        Command::Init => cmd_init(&config_path),
        Command::New { name } => cmd_new(&config_path, &name),
        Command::Status => cmd_status(&config_path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", output::err_line(&err.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: &PathBuf) -> Result<StrataConfig, CliError> {
    if path.exists() {
        StrataConfig::from_file(path).map_err(|e| CliError::Config(e.to_string()))
    } else {
        Ok(StrataConfig::default())
    }
}

fn cmd_init(config_path: &PathBuf) -> Result<(), CliError> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    let config = StrataConfig::default();
    let toml = config
        .to_toml()
        .map_err(|e| CliError::Config(e.to_string()))?;
    std::fs::write(config_path, toml)?;
    std::fs::create_dir_all(config.migrations_dir())?;

    println!(
        "{}",
        output::success(&format!("Created {}", config_path.display()))
    );
    println!(
        "{}",
        output::muted(&format!(
            "Migrations directory: {}",
            config.migrations_dir().display()
        ))
    );
    Ok(())
}

fn cmd_new(config_path: &PathBuf, name: &str) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let writer = MigrationWriter::new(config.migrations_dir(), config.naming);

    let placeholder = format!("-- Migration: {name}");
    let path = writer
        .write_migration(name, &[placeholder])
        .map_err(|e| CliError::Migration(e.to_string()))?;

    println!("{}", output::success(&format!("Created {}", path.display())));
    Ok(())
}

fn cmd_status(config_path: &PathBuf) -> Result<(), CliError> {
    let config = load_config(config_path)?;
    let writer = MigrationWriter::new(config.migrations_dir(), config.naming);

    let migrations = writer
        .list_migrations()
        .map_err(CliError::Io)?;
    if migrations.is_empty() {
        println!("{}", output::warning("No migrations found"));
        return Ok(());
    }

    for tag in migrations {
        println!("{tag}");
    }
    Ok(())
}
