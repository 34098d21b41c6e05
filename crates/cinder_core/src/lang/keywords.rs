//! Define the reserved keyword vocabulary for the Cinder language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and aliases.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; aliases are explicit.
//! - `class` is *not* reserved. It is a contextual word recognised by the parser at the top level only, see
//!   [`CLASS_WORD`].
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::from_str("def"), Some(KeywordId::Function)); // alias
//! assert_eq!(keywords::from_str("While"), None);
//! ```

/// Contextual word that introduces a class declaration at the top level.
///
/// It lexes as an ordinary identifier; the parser compares token text against it.
pub const CLASS_WORD: &str = "class";

/// Stable identifier for every reserved keyword.
///
/// The discriminant order matches [`KEYWORDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Function,
    If,
    Else,
    For,
    While,
    Return,
    True,
    False,
    Break,
    Continue,
    Let,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the preferred spelling for docs and dumps.
/// - `aliases` are additional spellings the lexer accepts for the same id.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// Registry of all keywords, in [`KeywordId`] order.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Function, "function", &["def"]),
    info(KeywordId::If, "if", &[]),
    info(KeywordId::Else, "else", &[]),
    info(KeywordId::For, "for", &[]),
    info(KeywordId::While, "while", &[]),
    info(KeywordId::Return, "return", &[]),
    info(KeywordId::True, "true", &[]),
    info(KeywordId::False, "false", &[]),
    info(KeywordId::Break, "break", &[]),
    info(KeywordId::Continue, "continue", &[]),
    info(KeywordId::Let, "let", &[]),
];

/// Metadata for a keyword id.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise (the word is an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    from_table(KEYWORDS, s)
}

/// Lookup by spelling in an arbitrary keyword table.
///
/// The lexer carries a table reference so callers can inject a restricted or extended vocabulary; [`from_str`] is
/// this function applied to [`KEYWORDS`].
pub fn from_table(table: &[KeywordInfo], s: &str) -> Option<KeywordId> {
    table
        .iter()
        .find(|k| k.canonical == s || k.aliases.contains(&s))
        .map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, aliases: &'static [&'static str]) -> KeywordInfo {
    KeywordInfo { id, canonical, aliases }
}
