/// Parser utility methods for names.
impl<'a> Parser<'a> {
    // ========================================================================
    // Names
    // ========================================================================

    /// Consume an identifier token and return its text.
    fn identifier(&mut self, msg: &str) -> ParseResult<Ident> {
        Ok(self.consume(TokenKind::Identifier, msg)?.text.clone())
    }

    /// Consume an identifier that names a known type.
    ///
    /// ## Errors
    /// - `UnknownType` if the identifier is not in the type table.
    /// - `Syntax` if the token is not an identifier at all.
    fn type_name(&mut self, msg: &str) -> ParseResult<Ident> {
        let tok = self.peek(msg)?;
        if tok.kind != TokenKind::Identifier {
            return Err(self.unexpected(tok, msg));
        }
        if !self.types.contains(&tok.text) {
            return Err(ParseError::unknown_type(
                format!("{}, found unknown type '{}'", msg, tok.text),
                tok.line,
            ));
        }
        self.pos += 1;
        Ok(tok.text.clone())
    }
}
