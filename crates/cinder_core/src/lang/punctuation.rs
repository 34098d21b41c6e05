//! Punctuation vocabulary.
//!
//! Single-character delimiters and separators. Every other character the lexer cannot classify becomes an
//! `Unknown` token.
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_char(PunctuationId::LBrace), '{');
//! assert_eq!(punctuation::from_char('#'), None);
//! ```

/// Stable identifier for punctuation tokens, in [`PUNCTUATION`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Colon,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, '('),
    info(PunctuationId::RParen, ')'),
    info(PunctuationId::LBrace, '{'),
    info(PunctuationId::RBrace, '}'),
    info(PunctuationId::LBracket, '['),
    info(PunctuationId::RBracket, ']'),
    info(PunctuationId::Semicolon, ';'),
    info(PunctuationId::Comma, ','),
    info(PunctuationId::Colon, ':'),
];

pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

pub fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: char) -> PunctuationInfo {
    PunctuationInfo { id, canonical }
}
