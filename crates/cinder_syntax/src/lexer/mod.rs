//! Lexer for the Cinder programming language
//!
//! Handles tokenization of line-split source text:
//! - Keywords and identifiers (ASCII letter first, then letters, digits, `_`)
//! - Integer literals (maximal run of digits and `.`; validated later by the parser)
//! - Operators (maximal munch over the operator character set)
//! - Single-character punctuation
//!
//! ## Notes
//! - The lexer never fails. Characters no rule accepts become [`TokenKind::Unknown`] tokens and the parser rejects
//!   them in context.
//! - Scanning is line-bounded, so no construct can be left unterminated.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and keyword classification

pub mod tokens;

pub use tokens::{Token, TokenKind, classify, classify_in};

use cinder_core::lang::keywords::{self, KeywordInfo};
use cinder_core::lang::operators::is_operator_char;
use cinder_core::lang::punctuation;
use std::iter::Peekable;
use std::str::CharIndices;

// ============================================================================
// LEXER
// ============================================================================

/// Lexer for Cinder source code.
///
/// A `Lexer` holds nothing but its (injected) keyword table, so one value can tokenize any number of inputs and
/// every call numbers lines from 1.
#[derive(Debug, Clone, Copy)]
pub struct Lexer {
    keywords: &'static [KeywordInfo],
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Create a lexer using the standard keyword registry.
    pub fn new() -> Self {
        Self::with_keywords(keywords::KEYWORDS)
    }

    /// Create a lexer that reserves exactly the words in `table`.
    pub fn with_keywords(table: &'static [KeywordInfo]) -> Self {
        Self { keywords: table }
    }

    /// Tokenize an ordered sequence of source lines.
    ///
    /// Lines must not contain their terminators. The returned stream has no newline tokens; each token carries the
    /// 1-based index of the line it came from.
    pub fn tokenize<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Token> {
        let mut tokens = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            LineScanner::new(line.as_ref(), idx + 1, self.keywords).scan_into(&mut tokens);
        }
        tokens
    }
}

// ============================================================================
// Line scanning
// ============================================================================

struct LineScanner<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    keywords: &'static [KeywordInfo],
}

impl<'a> LineScanner<'a> {
    fn new(source: &'a str, line: usize, keywords: &'static [KeywordInfo]) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line,
            keywords,
        }
    }

    fn scan_into(mut self, tokens: &mut Vec<Token>) {
        while let Some(&(start, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
                continue;
            }

            let token = if c.is_ascii_alphabetic() {
                let word = self.take_while(start, is_ident_continue);
                Token::new(classify_in(self.keywords, word), self.line, word)
            } else if c.is_ascii_digit() {
                let number = self.take_while(start, |c| c.is_ascii_digit() || c == '.');
                Token::new(TokenKind::IntLiteral, self.line, number)
            } else if is_operator_char(c) {
                let op = self.take_while(start, is_operator_char);
                Token::new(TokenKind::Operator, self.line, op)
            } else {
                self.chars.next();
                let kind = punctuation::from_char(c)
                    .map(TokenKind::Punctuation)
                    .unwrap_or(TokenKind::Unknown);
                Token::new(kind, self.line, c.to_string())
            };
            tokens.push(token);
        }
    }

    /// Consume the maximal run of characters satisfying `pred`, starting at byte `start`.
    fn take_while(&mut self, start: usize, pred: impl Fn(char) -> bool) -> &'a str {
        while let Some(&(_, c)) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            self.chars.next();
        }
        let end = self.chars.peek().map_or(self.source.len(), |&(i, _)| i);
        &self.source[start..end]
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a whole source string.
///
/// The text is split with [`str::lines`] (so `\n` and `\r\n` both work) and handed to [`Lexer::tokenize`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let lines: Vec<&str> = source.lines().collect();
    Lexer::new().tokenize(&lines)
}

/// Convenience function to lex pre-split source lines.
#[tracing::instrument(skip_all, fields(line_count = lines.len()))]
pub fn lex_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
    Lexer::new().tokenize(lines)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cinder_core::lang::keywords::KeywordId;
    use cinder_core::lang::punctuation::PunctuationId;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical);
            assert_eq!(tokens.len(), 1, "expected a single token for {:?}", k.canonical);
            assert!(tokens[0].kind.is_keyword(k.id));
            for alias in k.aliases {
                assert!(lex(alias)[0].kind.is_keyword(k.id));
            }
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = lex(&p.canonical.to_string());
            assert_eq!(tokens.len(), 1);
            assert!(tokens[0].kind.is_punctuation(p.id));
        }
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = lex("while whilst If let_x def");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Keyword(KeywordId::While),
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Keyword(KeywordId::Function),
            ]
        );
    }

    #[test]
    fn test_class_is_an_identifier() {
        let tokens = lex("class Point");
        assert_eq!(kinds(&tokens), vec![TokenKind::Identifier, TokenKind::Identifier]);
    }

    #[test]
    fn test_operator_maximal_munch() {
        let tokens = lex("a<=b");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]
        );
        assert_eq!(texts(&tokens), vec!["a", "<=", "b"]);

        let tokens = lex("x == y != z++ --w");
        assert_eq!(texts(&tokens), vec!["x", "==", "y", "!=", "z", "++", "--", "w"]);
    }

    #[test]
    fn test_nonsense_operator_run_is_one_token() {
        let tokens = lex("a +-* b");
        assert_eq!(texts(&tokens), vec!["a", "+-*", "b"]);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].operator_id(), None);
    }

    #[test]
    fn test_numbers_keep_malformed_dots() {
        let tokens = lex("42 3.14 1.2.3");
        assert_eq!(texts(&tokens), vec!["42", "3.14", "1.2.3"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::IntLiteral));
    }

    #[test]
    fn test_field_access_splits_on_dot() {
        let tokens = lex("p.x");
        assert_eq!(texts(&tokens), vec!["p", ".", "x"]);
        assert_eq!(tokens[1].kind, TokenKind::Operator);
    }

    #[test]
    fn test_punctuation_kinds() {
        let tokens = lex("f(a, b)[0]{x: 1;}");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::LParen),
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::Comma),
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::RParen),
                TokenKind::Punctuation(PunctuationId::LBracket),
                TokenKind::IntLiteral,
                TokenKind::Punctuation(PunctuationId::RBracket),
                TokenKind::Punctuation(PunctuationId::LBrace),
                TokenKind::Identifier,
                TokenKind::Punctuation(PunctuationId::Colon),
                TokenKind::IntLiteral,
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::Punctuation(PunctuationId::RBrace),
            ]
        );
    }

    #[test]
    fn test_unknown_characters() {
        let tokens = lex("a # _b π");
        assert_eq!(texts(&tokens), vec!["a", "#", "_", "b", "π"]);
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::Unknown,
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = lex_lines(&["float f()", "", "  { return 1; }"]);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[3].line, 1);
        assert!(tokens[4..].iter().all(|t| t.line == 3));
    }

    #[test]
    fn test_line_numbers_restart_per_call() {
        let lexer = Lexer::new();
        let first = lexer.tokenize(&["a", "b"]);
        let second = lexer.tokenize(&["c"]);
        assert_eq!(first[1].line, 2);
        assert_eq!(second[0].line, 1);
    }

    #[test]
    fn test_crlf_source() {
        let tokens = lex("a;\r\nb;\r\n");
        assert_eq!(texts(&tokens), vec!["a", ";", "b", ";"]);
        assert_eq!(tokens[2].line, 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("").is_empty());
        assert!(lex("   \n\t\n").is_empty());
    }

    #[test]
    fn test_custom_keyword_table() {
        let lexer = Lexer::with_keywords(&keywords::KEYWORDS[1..2]);
        let tokens = lexer.tokenize(&["if while"]);
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Keyword(KeywordId::If), TokenKind::Identifier]
        );
    }
}
