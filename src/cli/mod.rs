//! CLI module for the Cinder front end
//!
//! ## Commands
//!
//! - `lex <file>` - Print the token stream
//! - `parse <file>` - Print the tree dump (or the raw AST with `--debug`)
//! - `check <file>` - Parse and report success or the first error
//! - `ls` - List the source directory
//!
//! File names are resolved against `--dir` (default: current directory).
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::FrontendConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Invalid flags or configuration.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the Cinder toy language
#[derive(Parser, Debug)]
#[command(name = "cinder")]
#[command(version = VERSION)]
#[command(about = "Lexer and parser for the Cinder toy language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory source files are read from
    #[arg(long, short = 'd', global = true, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Primitive type name to seed the type table with (repeatable; replaces the defaults)
    #[arg(long = "primitive", short = 'p', global = true, value_name = "NAME")]
    pub primitives: Vec<String>,

    /// Refuse source files larger than this many bytes
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_source_size: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the token stream of a source file
    Lex {
        /// Source file name inside the source directory
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Parse a source file and print its syntax tree
    Parse {
        /// Source file name inside the source directory
        #[arg(value_name = "FILE")]
        file: String,
        /// Print the raw AST (`{:#?}`) instead of the tree dump
        #[arg(long)]
        debug: bool,
    },

    /// Parse a source file and report the first error, if any
    Check {
        /// Source file name inside the source directory
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// List the files in the source directory
    Ls {
        /// Show every file, not only `.cnd` sources
        #[arg(long, short = 'a')]
        all: bool,
    },
}

impl Cli {
    /// Build the front end configuration from the global flags.
    pub fn config(&self) -> FrontendConfig {
        let mut config = FrontendConfig::new().with_source_dir(&self.dir);
        if !self.primitives.is_empty() {
            config = config.with_primitive_types(self.primitives.iter().cloned());
        }
        if let Some(limit) = self.max_source_size {
            config = config.with_max_source_size(limit);
        }
        config
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    config
        .validate()
        .map_err(|e| CliError::usage(format!("Error: invalid configuration: {}", e)))?;
    tracing::debug!(dir = %config.source_dir.display(), primitives = ?config.primitive_types, "configured front end");

    match cli.command {
        Command::Lex { file } => commands::lex_file(&config, &file),
        Command::Parse { file, debug } => commands::parse_file(&config, &file, debug),
        Command::Check { file } => commands::check_file(&config, &file),
        Command::Ls { all } => commands::list_dir(&config, all),
    }
}

// ============================================================================
// Tests
// ============================================================================
