//! Syntax front end for the Cinder language: lexer, type table, parser, AST, diagnostics.
//!
//! The pipeline is strictly one-directional: source lines are lexed into a fully materialized token stream, and the
//! parser turns that stream into a [`ast::Program`] while growing a [`types::TypeTable`] as classes are declared.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no name resolution, type checking, or evaluation.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `cinder_core::lang` registries.
//! - Parsing is fail-fast: the first [`diagnostics::ParseError`] ends the parse and no partial tree is returned.
//!
//! ## Examples
//! ```rust
//! use cinder_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("float main() { return 1 + 2; }");
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.declarations.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
pub mod types;
