//! Property-based tests for the Cinder front end
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use cinder::ast::{BinaryOp, Expr, Statement};
use cinder::{FrontendConfig, dump_program, frontend, lexer, parser};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Fragments that exercise every grammar rule, including ones that are only valid in some positions.
const FRAGMENTS: &[&str] = &[
    "float", "void", "class", "Point", "x", "y", "main", "(", ")", "{", "}", "[", "]", ";", ",", ":", "=", "==",
    "+", "-", "*", "^", "<=", "++", "--", ".", "if", "else", "while", "for", "return", "break", "continue", "def",
    "0", "42", "2.5", "#", "+-*",
];

fn token_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..64).prop_map(|parts| parts.join(" "))
}

/// Random arithmetic/comparison trees over literals and variables.
fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0i64..1000).prop_map(Expr::Literal),
        prop::sample::select(vec!["a", "b", "c"]).prop_map(|v| Expr::Variable(v.to_string())),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        let op = prop::sample::select(vec![
            BinaryOp::Add,
            BinaryOp::Sub,
            BinaryOp::Mul,
            BinaryOp::Div,
            BinaryOp::Mod,
            BinaryOp::Caret,
            BinaryOp::Lt,
            BinaryOp::NotEq,
        ]);
        (inner.clone(), op, inner).prop_map(|(l, op, r)| Expr::Binary(Box::new(l), op, Box::new(r)))
    })
}

/// Fully parenthesized source text for an expression tree.
fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal(v) => v.to_string(),
        Expr::Variable(name) => name.clone(),
        Expr::Binary(l, op, r) => format!("({} {} {})", render(l), op, render(r)),
        other => unreachable!("strategy only builds literals, variables and binaries: {other:?}"),
    }
}

// =============================================================================
// Parser robustness
// =============================================================================

proptest! {
    /// Property: the parser returns `Ok` or `Err` on any token stream, never panics.
    #[test]
    fn parse_never_panics(source in token_soup()) {
        let tokens = lexer::lex(&source);
        let _ = parser::parse(&tokens);
    }

    /// Property: arbitrary text (including non-ASCII) goes through the whole front end without panicking.
    #[test]
    fn front_end_never_panics_on_text(lines in prop::collection::vec("\\PC{0,40}", 0..6)) {
        let _ = frontend::parse_lines(&lines, &FrontendConfig::default());
    }

    /// Property: a successful parse can always be dumped, and the dump has one line per node at least.
    #[test]
    fn successful_parse_dumps(source in token_soup()) {
        let tokens = lexer::lex(&source);
        if let Ok(program) = parser::parse(&tokens) {
            let out = dump_program(&program);
            prop_assert_eq!(out.is_empty(), program.declarations.is_empty());
        }
    }

    /// Property: errors always point at a line that exists in the input.
    #[test]
    fn error_lines_are_in_range(lines in prop::collection::vec(token_soup(), 1..5)) {
        if let Err(err) = frontend::parse_lines(&lines, &FrontendConfig::default()) {
            prop_assert!(err.line >= 1, "line must be 1-based: {}", err);
            prop_assert!(err.line <= lines.len(), "line {} out of range for {} lines", err.line, lines.len());
        }
    }

    /// Property: explicit parentheses fully determine the tree, whatever the operator precedence.
    #[test]
    fn parenthesized_expression_reparses_to_same_tree(expr in arb_expr()) {
        let source = format!("void f() {{ {}; }}", render(&expr));
        let tokens = lexer::lex(&source);
        let program = parser::parse(&tokens).expect("parenthesized source should parse");

        let cinder::ast::Declaration::Function(f) = &program.declarations[0] else {
            panic!("Expected function");
        };
        prop_assert_eq!(&f.body, &Statement::Block(vec![Statement::Expr(expr)]));
    }
}
