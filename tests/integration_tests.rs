//! End-to-end tests for the Cinder front end
//!
//! These go through the public crate surface: source directory, configuration, lexer, parser, tree dump and the
//! CLI dispatcher.

use std::fs;
use std::path::PathBuf;

use cinder::ast::{BinaryOp, Declaration, Expr, Statement, Type};
use cinder::cli::{Cli, ExitCode, execute};
use cinder::frontend::diagnostics::ParseErrorKind;
use cinder::lexer::TokenKind;
use cinder::{FrontendConfig, SourceDir, dump_program, frontend, lexer};
use cinder_core::lang::operators::OperatorId;
use clap::Parser;

/// Fresh scratch directory unique to this process and test.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cinder_it_{}_{}", std::process::id(), test));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

const SHAPES: &str = r"class Point {
  float x;
  float y;
}

class Segment {
  Point from;
  Point to;
}

Point midpoint(Segment s) {
  return Point { x: (s.from.x + s.to.x) / 2, y: (s.from.y + s.to.y) / 2 };
}

float main() {
  Segment s = Segment { from: Point { x: 0, y: 0 }, to: Point { x: 4, y: 2 } };
  Point m = midpoint(s);
  return m.x;
}
";

// ============================================================================
// Lexing
// ============================================================================

#[test]
fn test_comparison_lexes_as_one_operator() {
    let tokens = lexer::lex("a<=b");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]
    );
    assert_eq!(tokens[1].text, "<=");
    assert_eq!(tokens[1].operator_id(), Some(OperatorId::LtEq));
}

#[test]
fn test_token_lines_follow_source_lines() {
    let tokens = lexer::lex_lines(&["float f()", "", "{ return 1; }"]);
    assert_eq!(tokens.first().map(|t| t.line), Some(1));
    assert_eq!(tokens.last().map(|t| t.line), Some(3));
    assert!(tokens.iter().all(|t| t.line != 2));
}

// ============================================================================
// Parsing through the source directory
// ============================================================================

#[test]
fn test_parse_program_from_source_dir() {
    let dir = scratch_dir("shapes");
    fs::write(dir.join("shapes.cnd"), SHAPES).unwrap();

    let config = FrontendConfig::new().with_source_dir(&dir);
    let src = SourceDir::from_config(&config);
    let lines = src.read_lines("shapes.cnd");
    assert_eq!(lines.len(), SHAPES.lines().count());

    let parsed = frontend::parse_lines(&lines, &config).unwrap();
    assert_eq!(parsed.program.declarations.len(), 4);
    assert_eq!(parsed.types.names(), vec!["Point", "Segment", "float", "void"]);

    match &parsed.program.declarations[1] {
        Declaration::Class(c) => {
            assert_eq!(c.ty.field("from"), Some(&Type::Named("Point".to_string())));
        }
        other => panic!("Expected class, got {other:?}"),
    }

    match &parsed.program.declarations[3] {
        Declaration::Function(f) => {
            let Statement::Block(body) = &f.body else {
                panic!("Expected block body");
            };
            assert_eq!(body.len(), 3);
            assert!(matches!(&body[0], Statement::Definition(d) if d.ty == "Segment"));
            assert_eq!(
                body[2],
                Statement::Return(Some(Expr::Field(
                    Box::new(Expr::Variable("m".to_string())),
                    "x".to_string()
                )))
            );
        }
        other => panic!("Expected function, got {other:?}"),
    }

    let dump = dump_program(&parsed.program);
    assert!(dump.starts_with("Class(Point)\n  x: float\n  y: float\nClass(Segment)\n"));
    assert!(dump.contains("StructInstanceExpr(Segment)"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_definition_depends_on_declared_types() {
    let config = FrontendConfig::default();

    let err = frontend::parse_lines(&["void f() {", "  Foo x = 1;", "}"], &config).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Syntax);
    assert_eq!(err.line, 2);
    assert_eq!(err.to_string(), "Parse Error: Expected ';' after expression, found 'x' [Line: 2]");

    let parsed = frontend::parse_lines(&["class Foo { }", "void f() {", "  Foo x = 1;", "}"], &config).unwrap();
    assert_eq!(parsed.program.declarations.len(), 2);
}

#[test]
fn test_unterminated_block_is_end_of_input() {
    let err = frontend::parse_lines(&["void f() {", "  if (1) { }"], &FrontendConfig::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    assert_eq!(err.line, 2);
    assert!(err.to_string().starts_with("Parse Error: Unexpected end of input"));
}

#[test]
fn test_missing_source_reads_as_empty_program() {
    let dir = scratch_dir("missing");
    let config = FrontendConfig::new().with_source_dir(&dir);
    let lines = SourceDir::from_config(&config).read_lines("absent.cnd");
    assert!(lines.is_empty());

    let parsed = frontend::parse_lines(&lines, &config).unwrap();
    assert!(parsed.program.declarations.is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_caret_groups_with_multiplication() {
    let parsed = frontend::parse_lines(&["float f() return 1 + 2 ^ 3;"], &FrontendConfig::default()).unwrap();
    let Declaration::Function(f) = &parsed.program.declarations[0] else {
        panic!("Expected function");
    };
    let Statement::Return(Some(Expr::Binary(_, op, rhs))) = &f.body else {
        panic!("Expected return of a binary expression, got {:?}", f.body);
    };
    assert_eq!(*op, BinaryOp::Add);
    assert!(matches!(**rhs, Expr::Binary(_, BinaryOp::Caret, _)));
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn test_cli_check_with_custom_primitives() {
    let dir = scratch_dir("cli_primitives");
    fs::write(dir.join("ints.cnd"), "int main() { int x = 1; return x; }\n").unwrap();
    let dir_arg = dir.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["cinder", "check", "ints.cnd", "--dir", &dir_arg]).unwrap();
    let err = execute(cli).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);

    let cli = Cli::try_parse_from(["cinder", "check", "ints.cnd", "--dir", &dir_arg, "-p", "int"]).unwrap();
    assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_cli_ls_and_parse() {
    let dir = scratch_dir("cli_ls");
    fs::write(dir.join("shapes.cnd"), SHAPES).unwrap();
    let dir_arg = dir.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["cinder", "ls", "--dir", &dir_arg]).unwrap();
    assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

    let cli = Cli::try_parse_from(["cinder", "parse", "shapes.cnd", "--dir", &dir_arg]).unwrap();
    assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

    let _ = fs::remove_dir_all(&dir);
}
