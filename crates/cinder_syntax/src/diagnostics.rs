//! Parse diagnostics.
//!
//! Cinder has a single error family in the front end: the lexer never fails (unrecognised characters become
//! `Unknown` tokens), so every diagnostic is a [`ParseError`] raised by the parser.
//!
//! ## Notes
//! - Errors carry the 1-based source line of the offending token. No column is tracked.
//! - `Display` renders the classic one-line form: `Parse Error: <message> [Line: <n>]`.

use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Wrong token for the current grammar position.
    Syntax,
    /// The token stream ended inside a construct.
    UnexpectedEof,
    /// A type position named something absent from the type table.
    UnknownType,
    /// An integer literal whose text does not parse as `i64`.
    InvalidLiteral,
    /// A class or field name declared twice.
    Redeclaration,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Syntax => write!(f, "syntax error"),
            ParseErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            ParseErrorKind::UnknownType => write!(f, "unknown type"),
            ParseErrorKind::InvalidLiteral => write!(f, "invalid literal"),
            ParseErrorKind::Redeclaration => write!(f, "redeclaration"),
        }
    }
}

/// A grammar violation with its source line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("Parse Error: {message} [Line: {line}]")]
#[diagnostic(code(cinder::parse))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
        }
    }

    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::Syntax, message, line)
    }

    /// Build an end-of-input error; `expected` describes what the parser was looking for.
    pub fn unexpected_eof(expected: &str, line: usize) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEof,
            format!("Unexpected end of input: {expected}"),
            line,
        )
    }

    pub fn unknown_type(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::UnknownType, message, line)
    }

    pub fn invalid_literal(text: &str, line: usize) -> Self {
        Self::new(
            ParseErrorKind::InvalidLiteral,
            format!("Invalid integer literal '{text}'"),
            line,
        )
    }

    pub fn redeclaration(message: impl Into<String>, line: usize) -> Self {
        Self::new(ParseErrorKind::Redeclaration, message, line)
    }
}

/// Result alias used throughout the parser.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_classic_format() {
        let err = ParseError::syntax("Expected ')' after condition", 7);
        assert_eq!(err.to_string(), "Parse Error: Expected ')' after condition [Line: 7]");
    }

    #[test]
    fn test_eof_message() {
        let err = ParseError::unexpected_eof("Expected '}' at the end of a block", 3);
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
        assert!(err.message.starts_with("Unexpected end of input"));
        assert_eq!(err.line, 3);
    }
}
