/// Expression parsing methods.
///
/// Binary expressions are parsed one precedence level at a time, loosest first:
///
/// | Level            | Operators                  |
/// |------------------|----------------------------|
/// | assignment       | `=`                        |
/// | comparison       | `==` `!=` `<` `<=` `>` `>=`|
/// | additive         | `+` `-`                    |
/// | multiplicative   | `*` `/` `%` `^`            |
/// | prefix           | `++` `--`                  |
/// | primary/postfix  | `[i]` `.f` `++` `--` `()`  |
///
/// Which spellings live on which level, and how each binary operator associates, comes from the operator registry
/// in `cinder_core`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> ParseResult<Expr> {
        self.nested(|p| p.binary(Precedence::Assignment))
    }

    /// Parse `operand (op operand)*` for the infix operators on `level`.
    ///
    /// Left-associative operators fold into the left operand; a right-associative operator takes the rest of the
    /// level as its right operand.
    fn binary(&mut self, level: Precedence) -> ParseResult<Expr> {
        let mut lhs = self.operand(level)?;
        while let Some((id, op)) = self.match_binary(level) {
            let rhs = match operators::info_for(id).associativity {
                Associativity::Left => self.operand(level)?,
                Associativity::Right => self.nested(|p| p.binary(level))?,
            };
            lhs = Expr::Binary(Box::new(lhs), op, Box::new(rhs));
        }
        Ok(lhs)
    }

    /// Parse an operand of a `level` operator: an expression on the next tighter level.
    fn operand(&mut self, level: Precedence) -> ParseResult<Expr> {
        match level {
            Precedence::Assignment => self.binary(Precedence::Comparison),
            Precedence::Comparison => self.binary(Precedence::Additive),
            Precedence::Additive => self.binary(Precedence::Multiplicative),
            Precedence::Multiplicative | Precedence::Unary | Precedence::Access => self.unary(),
        }
    }

    /// Prefix `++` / `--`, nested to any depth up to the nesting limit.
    fn unary(&mut self) -> ParseResult<Expr> {
        let prefix = self
            .current()
            .and_then(Token::operator_id)
            .and_then(UnaryOp::from_operator);
        if let Some(op) = prefix {
            self.pos += 1;
            let operand = self.nested(Self::unary)?;
            return Ok(Expr::Prefix(op, Box::new(operand)));
        }
        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        const EXPECTED: &str = "Expected a number, variable, or '('";

        let tok = self.peek(EXPECTED)?;
        match tok.kind {
            TokenKind::IntLiteral => {
                self.pos += 1;
                tok.text
                    .parse::<i64>()
                    .map(Expr::Literal)
                    .map_err(|_| ParseError::invalid_literal(&tok.text, tok.line))
            }
            TokenKind::Identifier => {
                self.pos += 1;
                if self.classes.contains_key(&tok.text) && self.check_punct(PunctuationId::LBrace) {
                    return self.class_instance(tok);
                }
                self.postfix(Expr::Variable(tok.text.clone()))
            }
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.pos += 1;
                let inner = self.expression()?;
                self.consume_punct(PunctuationId::RParen, "Expected ')' after expression")?;
                Ok(inner)
            }
            _ => Err(self.unexpected(tok, EXPECTED)),
        }
    }

    /// Apply `[index]`, `.field`, `++`, `--` and `(args)` suffixes, in any order, left to right.
    fn postfix(&mut self, mut expr: Expr) -> ParseResult<Expr> {
        loop {
            if self.match_punct(PunctuationId::LBracket) {
                let index = self.expression()?;
                self.consume_punct(PunctuationId::RBracket, "Expected ']' after index")?;
                expr = Expr::Index(Box::new(expr), Box::new(index));
            } else if self.match_op(OperatorId::Dot) {
                let field = self.identifier("Expected field name after '.'")?;
                expr = Expr::Field(Box::new(expr), field);
            } else if self.match_op(OperatorId::PlusPlus) {
                expr = Expr::Postfix(UnaryOp::Increment, Box::new(expr));
            } else if self.match_op(OperatorId::MinusMinus) {
                expr = Expr::Postfix(UnaryOp::Decrement, Box::new(expr));
            } else if self.match_punct(PunctuationId::LParen) {
                let args = self.call_arguments()?;
                expr = Expr::Call(Box::new(expr), args);
            } else {
                return Ok(expr);
            }
        }
    }

    /// Arguments after the opening `(` of a call, through the closing `)`.
    fn call_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.consume_punct(PunctuationId::RParen, "Expected ')' after function call arguments")?;
        Ok(args)
    }

    /// `Name { field: expr, ... }` for a declared class `Name`. A trailing comma is accepted.
    fn class_instance(&mut self, name: &'a Token) -> ParseResult<Expr> {
        let Some(ty) = self.classes.get(&name.text).cloned() else {
            return Err(ParseError::unknown_type(
                format!("Unknown class '{}'", name.text),
                name.line,
            ));
        };

        self.consume_punct(PunctuationId::LBrace, "Expected '{' after class name")?;

        let mut fields: Vec<(Ident, Expr)> = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) {
            let field_tok = self.peek("Expected '}' after class instance fields")?;
            let field = self.identifier("Expected a field name in class instance")?;

            if ty.field(&field).is_none() {
                return Err(ParseError::syntax(
                    format!("Class '{}' has no field '{}'", ty.name, field),
                    field_tok.line,
                ));
            }
            if fields.iter().any(|(n, _)| *n == field) {
                return Err(ParseError::redeclaration(
                    format!("Field '{}' is initialized twice", field),
                    field_tok.line,
                ));
            }

            self.consume_punct(PunctuationId::Colon, "Expected ':' after field name")?;
            let value = self.expression()?;
            fields.push((field, value));

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        self.consume_punct(PunctuationId::RBrace, "Expected '}' after class instance fields")?;

        Ok(Expr::ClassInstance(ClassInstanceExpr { ty, fields }))
    }
}
