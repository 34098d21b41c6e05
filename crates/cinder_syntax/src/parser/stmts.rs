/// Statement parsing methods.
///
/// This chunk parses statement forms (blocks, `if`, `while`, `for`, `return`, loop control, definitions and
/// expression statements).
///
/// ## Notes
/// - Dispatch is on the lookahead token. A token whose text is a known type name starts a definition; this is the
///   only place the type table disambiguates.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> ParseResult<Statement> {
        self.nested(Self::statement_inner)
    }

    fn statement_inner(&mut self) -> ParseResult<Statement> {
        let tok = self.peek("Expected a statement")?;

        if self.check_punct(PunctuationId::LBrace) {
            self.block()
        } else if self.check_keyword(KeywordId::If) {
            self.if_stmt()
        } else if self.check_keyword(KeywordId::While) {
            self.while_stmt()
        } else if self.check_keyword(KeywordId::For) {
            self.for_stmt()
        } else if self.check_keyword(KeywordId::Return) {
            self.return_stmt()
        } else if self.check_keyword(KeywordId::Break) || self.check_keyword(KeywordId::Continue) {
            self.loop_control()
        } else if self.types.contains(&tok.text) {
            self.definition()
        } else {
            self.expression_stmt()
        }
    }

    /// `{ statement* }`
    fn block(&mut self) -> ParseResult<Statement> {
        self.consume_punct(PunctuationId::LBrace, "Expected '{' at the start of a block")?;

        let mut statements = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) {
            if self.is_at_end() {
                return Err(ParseError::unexpected_eof(
                    "Expected '}' at the end of a block",
                    self.last_line(),
                ));
            }
            statements.push(self.statement()?);
        }

        self.consume_punct(PunctuationId::RBrace, "Expected '}' at the end of a block")?;
        Ok(Statement::Block(statements))
    }

    fn if_stmt(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Keyword(KeywordId::If), "Expected 'if'")?;
        self.consume_punct(PunctuationId::LParen, "Expected '(' after 'if'")?;
        let condition = self.expression()?;
        self.consume_punct(PunctuationId::RParen, "Expected ')' after condition")?;

        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.match_keyword(KeywordId::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Statement::If(IfStmt {
            condition,
            then_branch,
            else_branch,
        }))
    }

    fn while_stmt(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Keyword(KeywordId::While), "Expected 'while'")?;
        self.consume_punct(PunctuationId::LParen, "Expected '(' after 'while'")?;
        let condition = self.expression()?;
        self.consume_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        let body = Box::new(self.statement()?);

        Ok(Statement::While(WhileStmt { condition, body }))
    }

    /// `for ( expr ; expr ; expr ) statement`; all three clauses are required.
    fn for_stmt(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Keyword(KeywordId::For), "Expected 'for'")?;
        self.consume_punct(PunctuationId::LParen, "Expected '(' after 'for'")?;
        let init = self.expression()?;
        self.consume_punct(PunctuationId::Semicolon, "Expected ';' after 'for' initializer")?;
        let condition = self.expression()?;
        self.consume_punct(PunctuationId::Semicolon, "Expected ';' after 'for' condition")?;
        let step = self.expression()?;
        self.consume_punct(PunctuationId::RParen, "Expected ')' after 'for' clauses")?;
        let body = Box::new(self.statement()?);

        Ok(Statement::For(ForStmt {
            init,
            condition,
            step,
            body,
        }))
    }

    /// `return ;` or `return expr ;`
    fn return_stmt(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Keyword(KeywordId::Return), "Expected 'return'")?;
        if self.match_punct(PunctuationId::Semicolon) {
            return Ok(Statement::Return(None));
        }
        let value = self.expression()?;
        self.consume_punct(PunctuationId::Semicolon, "Expected ';' after return value")?;
        Ok(Statement::Return(Some(value)))
    }

    fn loop_control(&mut self) -> ParseResult<Statement> {
        if self.match_keyword(KeywordId::Break) {
            self.consume_punct(PunctuationId::Semicolon, "Expected ';' after 'break'")?;
            return Ok(Statement::Break);
        }
        if self.match_keyword(KeywordId::Continue) {
            self.consume_punct(PunctuationId::Semicolon, "Expected ';' after 'continue'")?;
            return Ok(Statement::Continue);
        }
        let tok = self.peek("Expected 'break' or 'continue'")?;
        Err(self.unexpected(tok, "Expected 'break' or 'continue'"))
    }

    /// `Type expr ;`, where the expression is normally an assignment such as `x = 5`.
    fn definition(&mut self) -> ParseResult<Statement> {
        let ty = self.consume(TokenKind::Identifier, "Expected a datatype")?.text.clone();
        let initializer = self.expression()?;
        self.consume_punct(PunctuationId::Semicolon, "Expected ';' after definition")?;
        Ok(Statement::Definition(DefinitionStmt { ty, initializer }))
    }

    fn expression_stmt(&mut self) -> ParseResult<Statement> {
        let expr = self.expression()?;
        self.consume_punct(PunctuationId::Semicolon, "Expected ';' after expression")?;
        Ok(Statement::Expr(expr))
    }
}
