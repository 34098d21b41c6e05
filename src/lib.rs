#![forbid(unsafe_code)]
//! Cinder front end
//!
//! Cinder is a small C-like toy language. This crate wires the syntax front end (lexer, parser, type table) to a
//! source directory, a tree dump, rendered diagnostics, and the `cinder` command line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! use cinder::{FrontendConfig, dump_program, frontend};
//!
//! let parsed = frontend::parse_lines(&["float main() { return 1; }"], &FrontendConfig::default()).unwrap();
//! assert!(dump_program(&parsed.program).starts_with("FunctionDecl(main)\n"));
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod format;
pub mod frontend;
pub mod source_dir;

pub use frontend::ast;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::types;

pub use config::{ConfigError, FrontendConfig};
pub use diagnostics::SourceDiagnostic;
pub use format::{DumpConfig, dump_program, dump_program_with_config, dump_source};
pub use source_dir::SourceDir;
