/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`current`, `peek`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - End-of-input handling
/// - Nesting depth accounting
///
/// Every read past the end of the stream goes through [`Parser::peek`], which turns it into an
/// "Unexpected end of input" error instead of an out-of-bounds access.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token, or `None` at end of input.
    fn current(&self) -> Option<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        tokens.get(self.pos)
    }

    /// Return the current token, failing with an end-of-input error that mentions `expected`.
    fn peek(&self, expected: &str) -> ParseResult<&'a Token> {
        self.current()
            .ok_or_else(|| ParseError::unexpected_eof(expected, self.last_line()))
    }

    /// Consume the current token and return it.
    fn advance(&mut self, expected: &str) -> ParseResult<&'a Token> {
        let tok = self.peek(expected)?;
        self.pos += 1;
        Ok(tok)
    }

    /// Line of the last token in the stream (1 for an empty stream).
    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }

    /// Line of the current token, or of the last token at end of input.
    fn current_line(&self) -> usize {
        self.current().map_or_else(|| self.last_line(), |t| t.line)
    }

    /// Return `true` if the current token has exactly this kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.check(TokenKind::Keyword(id))
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.check(TokenKind::Punctuation(id))
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.current().is_some_and(|t| t.is_operator(id))
    }

    /// If the current token has this kind, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        self.match_token(TokenKind::Keyword(id))
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        self.match_token(TokenKind::Punctuation(id))
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a binary operator that lives on `level`, if the current token is one.
    fn match_binary(&mut self, level: Precedence) -> Option<(OperatorId, BinaryOp)> {
        let tok = self.current()?;
        if tok.kind != TokenKind::Operator {
            return None;
        }
        let id = operators::binary_at(level, &tok.text)?;
        let op = BinaryOp::from_operator(id)?;
        self.pos += 1;
        Some((id, op))
    }

    /// Run `f` one nesting level deeper, failing once [`MAX_NESTING_DEPTH`] is exceeded.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::syntax(
                format!("Nesting too deep (limit {MAX_NESTING_DEPTH})"),
                self.current_line(),
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Consume a token of the given kind or fail with `msg`.
    fn consume(&mut self, kind: TokenKind, msg: &str) -> ParseResult<&'a Token> {
        let tok = self.peek(msg)?;
        if tok.kind == kind {
            self.pos += 1;
            Ok(tok)
        } else {
            Err(self.unexpected(tok, msg))
        }
    }

    fn consume_punct(&mut self, id: PunctuationId, msg: &str) -> ParseResult<&'a Token> {
        self.consume(TokenKind::Punctuation(id), msg)
    }

    /// Build a syntax error for `tok`, naming what was found.
    fn unexpected(&self, tok: &Token, msg: &str) -> ParseError {
        ParseError::syntax(format!("{}, found '{}'", msg, tok.text), tok.line)
    }
}
