//! Cinder front end
//!
//! This module ties the syntax crate to the configuration:
//! - `lexer`: tokenization of source lines
//! - `parser`: parsing tokens into the AST
//! - `ast`: abstract syntax tree definitions
//! - `types`: the type table that disambiguates definitions
//! - `diagnostics`: parse errors

// Syntax components are provided by the shared cinder_syntax crate.
pub use cinder_syntax::{ast, diagnostics, lexer, parser, types};

use crate::config::FrontendConfig;
use ast::Program;
use diagnostics::ParseResult;
use types::TypeTable;

/// Outcome of running the front end over one source.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub program: Program,
    /// The configured primitives plus every class the program declares
    pub types: TypeTable,
    pub token_count: usize,
}

/// Lex and parse ordered source lines with the type seed from `config`.
pub fn parse_lines<S: AsRef<str>>(lines: &[S], config: &FrontendConfig) -> ParseResult<ParsedSource> {
    let tokens = lexer::lex_lines(lines);
    let token_count = tokens.len();
    let (program, types) = parser::parse_with_types(&tokens, config.type_table())?;
    Ok(ParsedSource {
        program,
        types,
        token_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_uses_configured_primitives() {
        let config = FrontendConfig::new().with_primitive_types(["int"]);
        let parsed = parse_lines(&["class Box { int v; }", "int main() { Box b = 1; }"], &config).unwrap();
        assert_eq!(parsed.program.declarations.len(), 2);
        assert!(parsed.types.contains("Box"));
        assert!(parsed.types.is_primitive("int"));
        assert_eq!(parsed.token_count, 18);
    }

    #[test]
    fn test_parse_lines_reports_line() {
        let config = FrontendConfig::default();
        let err = parse_lines(&["float main() {", "  return 1", "}"], &config).unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.message, "Expected ';' after return value, found '}'");
    }
}
