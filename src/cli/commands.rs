//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use cinder_core::lang::{keywords, punctuation};
use cinder_syntax::diagnostics::ParseError;
use cinder_syntax::lexer::{self, Token, TokenKind};

use crate::config::FrontendConfig;
use crate::diagnostics::SourceDiagnostic;
use crate::format;
use crate::frontend::{self, ParsedSource};
use crate::source_dir::SourceDir;

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// Source loading
// ============================================================================

/// Read `file` from the configured directory as lines.
///
/// `SourceDir` only logs read failures, so a missing or unreadable file is turned into a CLI error here.
fn load_source(config: &FrontendConfig, file: &str) -> CliResult<Vec<String>> {
    let dir = SourceDir::from_config(config);
    if !dir.exists(file) {
        return Err(CliError::failure(format!(
            "Error: '{}' not found in {}",
            file,
            dir.root().display()
        )));
    }

    let lines = dir.read_lines(file);
    let on_disk = fs::metadata(dir.path_of(file)).map_or(0, |m| m.len());
    if lines.is_empty() && on_disk > 0 {
        return Err(CliError::failure(format!(
            "Error: could not read '{}' (see log for details)",
            file
        )));
    }
    Ok(lines)
}

/// Lex and parse `file`, rendering the first parse error as a diagnostic.
fn parse_source(config: &FrontendConfig, file: &str) -> CliResult<ParsedSource> {
    let lines = load_source(config, file)?;
    frontend::parse_lines(&lines, config).map_err(|err| render_parse_error(file, &lines, &err))
}

fn render_parse_error(file: &str, lines: &[String], err: &ParseError) -> CliError {
    tracing::debug!(file, line = err.line, kind = %err.kind, "parse failed");
    let source = lines.join("\n");
    let report = miette::Report::new(SourceDiagnostic::from_parse_error(file, &source, err));
    CliError::failure(format!("{:?}", report))
}

// ============================================================================
// Commands
// ============================================================================

/// Print every token as `Line <n>: <text> (<kind>)`.
pub fn lex_file(config: &FrontendConfig, file: &str) -> CliResult<ExitCode> {
    let lines = load_source(config, file)?;
    let tokens = lexer::lex_lines(&lines);

    for tok in &tokens {
        println!("Line {}: {} ({})", tok.line, tok.text, describe(tok));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the tree dump, or the raw AST with `debug`.
pub fn parse_file(config: &FrontendConfig, file: &str, debug: bool) -> CliResult<ExitCode> {
    let parsed = parse_source(config, file)?;

    if debug {
        println!("{:#?}", parsed.program);
    } else {
        print!("{}", format::dump_program(&parsed.program));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and report the outcome.
pub fn check_file(config: &FrontendConfig, file: &str) -> CliResult<ExitCode> {
    let parsed = parse_source(config, file)?;
    println!(
        "✓ {}: {} declaration(s), {} token(s), types: {}",
        file,
        parsed.program.declarations.len(),
        parsed.token_count,
        parsed.types.names().join(", ")
    );
    Ok(ExitCode::SUCCESS)
}

/// List the source directory.
pub fn list_dir(config: &FrontendConfig, all: bool) -> CliResult<ExitCode> {
    let dir = SourceDir::from_config(config);
    if !dir.root().is_dir() {
        return Err(CliError::failure(format!(
            "Error: source directory {} does not exist",
            dir.root().display()
        )));
    }

    let names = if all { dir.list() } else { dir.list_sources() };
    for name in names {
        println!("{}", name);
    }
    Ok(ExitCode::SUCCESS)
}

/// Short human-readable token class.
fn describe(tok: &Token) -> String {
    match tok.kind {
        TokenKind::Keyword(id) => format!("keyword {}", keywords::as_str(id)),
        TokenKind::Punctuation(id) => format!("punctuation {}", punctuation::as_char(id)),
        TokenKind::Operator => match tok.operator_id() {
            Some(_) => "operator".to_string(),
            None => "operator (unknown)".to_string(),
        },
        TokenKind::IntLiteral => "integer".to_string(),
        TokenKind::Identifier => "identifier".to_string(),
        TokenKind::Unknown => "unknown".to_string(),
    }
}
