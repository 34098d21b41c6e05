//! Parser for the Cinder programming language
//!
//! Converts a token stream into an AST using recursive descent for statements and declarations and a precedence
//! ladder for expressions. A [`TypeTable`] decides whether a statement is a definition, and grows as classes are
//! declared.
//!
//! ## Examples
//!
//! ```rust
//! use cinder_syntax::{lexer, parser};
//!
//! let source = "class Point { float x; float y; }\nPoint origin() { return Point { x: 0, y: 0 }; }";
//! let tokens = lexer::lex(source);
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.declarations.len(), 2);
//! ```

use std::collections::HashMap;

use crate::ast::*;
use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::{Token, TokenKind};
use crate::types::TypeTable;
use cinder_core::lang::keywords::{self, KeywordId};
use cinder_core::lang::operators::{self, Associativity, OperatorId, Precedence};
use cinder_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
