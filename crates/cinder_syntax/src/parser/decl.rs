/// Declaration parsing methods.
///
/// This chunk parses top-level declarations: functions and classes.
///
/// ## Notes
/// - A class name is registered in the type table *before* its body is parsed, so a class may contain fields of its
///   own type.
/// - Field and parameter types must already be known; there is no forward declaration.
impl<'a> Parser<'a> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `Type name ( [Type name {, Type name}] ) statement`
    fn function_decl(&mut self) -> ParseResult<FunctionDecl> {
        let return_type = self.type_name("Expected return datatype for function")?;
        let name = self.identifier("Expected function name after return type")?;
        self.consume_punct(PunctuationId::LParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                let ty = self.type_name("Expected a parameter type")?;
                let name = self.identifier("Expected a parameter name")?;
                params.push(Param { name, ty });
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.consume_punct(PunctuationId::RParen, "Expected ')' after parameters")?;

        let body = self.statement()?;

        Ok(FunctionDecl {
            name,
            params,
            return_type,
            body,
        })
    }

    /// `class Name { (Type field ;)* }`
    fn class_decl(&mut self) -> ParseResult<ClassDecl> {
        self.advance("Expected 'class'")?;
        let name_line = self.current_line();
        let name = self.identifier("Expected a class identifier (name)")?;

        if !self.types.add(name.clone()) {
            return Err(ParseError::redeclaration(
                format!("Type '{}' is already declared", name),
                name_line,
            ));
        }
        tracing::debug!(class = %name, "registered class type");

        self.consume_punct(PunctuationId::LBrace, "Expected '{' to begin class body")?;

        let mut ty = StructType::new(name.clone());
        while !self.check_punct(PunctuationId::RBrace) {
            if self.is_at_end() {
                return Err(ParseError::unexpected_eof("Expected '}' after class body", self.last_line()));
            }
            let field_type = self.type_name("Expected a field type")?;
            let field_line = self.current_line();
            let field_name = self.identifier("Expected field name")?;
            self.consume_punct(PunctuationId::Semicolon, "Expected ';' after field declaration")?;

            let descriptor = if self.types.is_primitive(&field_type) {
                Type::Primitive(field_type)
            } else {
                Type::Named(field_type)
            };
            if !ty.add_field(field_name.clone(), descriptor) {
                return Err(ParseError::redeclaration(
                    format!("Field '{}' is declared twice in class '{}'", field_name, name),
                    field_line,
                ));
            }
        }
        self.consume_punct(PunctuationId::RBrace, "Expected '}' after class body")?;

        self.classes.insert(name.clone(), ty.clone());
        Ok(ClassDecl { name, ty })
    }
}
