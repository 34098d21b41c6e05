// ============================================================================
// Public API
// ============================================================================

/// Parse a token stream with the default primitive type table.
///
/// ## Errors
/// Returns the first [`ParseError`]; no partial program is produced.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    Parser::new(tokens).parse()
}

/// Parse with an explicit seed type table and hand back the table grown by the program's classes.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), seed_types = types.len()))]
pub fn parse_with_types(tokens: &[Token], types: TypeTable) -> ParseResult<(Program, TypeTable)> {
    let mut parser = Parser::with_types(tokens, types);
    let program = parser.parse_program()?;
    tracing::debug!(declarations = program.declarations.len(), "parsed program");
    Ok((program, parser.types))
}
