//! Canonical language vocabulary for the Cinder front end.
//!
//! This crate is intentionally tiny and dependency-free. It holds the const tables the lexer and parser are built
//! on: reserved keywords, operator spellings with their precedence levels, and single-character punctuation.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, and no AST types.
//! - The lexer/parser in `cinder_syntax` own syntax rules; this crate only answers "what is this spelling?".

pub mod lang;
