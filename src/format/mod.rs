//! Cinder tree dump
//!
//! Renders a parsed [`Program`] as an indented, human-readable tree. Node names follow the
//! classic front end dump (`FunctionDecl(main)`, `BinaryExpr(+)`, `identifier(x)`, ...), two spaces per level by
//! default.

mod config;
mod tree;
mod writer;

pub use config::DumpConfig;
pub use tree::TreeDumper;

use cinder_syntax::ast::Program;
use cinder_syntax::diagnostics::ParseError;
use cinder_syntax::{lexer, parser};

/// Dump a program with default settings
pub fn dump_program(program: &Program) -> String {
    dump_program_with_config(program, DumpConfig::default())
}

/// Dump a program with custom configuration
pub fn dump_program_with_config(program: &Program, config: DumpConfig) -> String {
    TreeDumper::new(config).dump(program)
}

/// Lex, parse and dump source text with the default type table
pub fn dump_source(source: &str) -> Result<String, ParseError> {
    let tokens = lexer::lex(source);
    let program = parser::parse(&tokens)?;
    Ok(dump_program(&program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_empty_program() {
        assert_eq!(dump_source("").unwrap(), "");
    }

    #[test]
    fn test_dump_simple_function() {
        let out = dump_source("float main() { return 1 + 2; }").unwrap();
        let expected = "\
FunctionDecl(main)
  Return Type: float
  Params: (none)
  Body:
    CompoundStmt
      ReturnStmt
        Expression:
          BinaryExpr(+)
            Literal(1)
            Literal(2)
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_dump_propagates_parse_error() {
        let err = dump_source("float main() {").unwrap_err();
        assert!(err.message.starts_with("Unexpected end of input"));
    }

    #[test]
    fn test_blank_line_between_declarations() {
        let tokens = lexer::lex("void a() return;\nvoid b() return;");
        let program = parser::parse(&tokens).unwrap();
        let out = dump_program_with_config(&program, DumpConfig::new().with_blank_line_between_declarations(true));
        assert!(
            out.contains("      No expression (return)\n\nFunctionDecl(b)\n"),
            "got:\n{out}"
        );
        assert!(!out.ends_with("\n\n"), "got:\n{out}");
    }
}
