//! Token types for the Cinder lexer.
//!
//! The lexer uses **registry-backed IDs** for fixed vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Punctuation(PunctuationId)` for single-character delimiters and separators
//!
//! Operators are different: the lexer munches any run of operator characters into one `Operator` token, so the
//! spelling lives in [`Token::text`] and only well-formed runs resolve to an `OperatorId`
//! (see [`Token::operator_id`](crate::token_helpers)).

use cinder_core::lang::keywords::{self, KeywordId, KeywordInfo};
use cinder_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Text-carrying ==========
    /// Maximal run of operator characters, e.g. `<=` or `++`.
    Operator,
    /// Maximal run of digits and dots starting with a digit.
    IntLiteral,
    Identifier,

    // ========== Special ==========
    /// Any single character no other rule accepts.
    Unknown,
}

/// A token with its kind, source line and exact source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }
}

/// Classify an identifier-shaped word against the default keyword registry.
///
/// Every word maps to something: a keyword kind on an exact match, [`TokenKind::Identifier`] otherwise.
pub fn classify(word: &str) -> TokenKind {
    classify_in(keywords::KEYWORDS, word)
}

/// Classify a word against an explicit keyword table.
pub fn classify_in(table: &[KeywordInfo], word: &str) -> TokenKind {
    match keywords::from_table(table, word) {
        Some(id) => TokenKind::Keyword(id),
        None => TokenKind::Identifier,
    }
}
