/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".

/// Deepest nesting of statements and expressions the parser accepts.
///
/// Each nested block, statement, parenthesized or bracketed expression, prefix operator and right-associative
/// operand counts one level. Deeper input is rejected with a syntax error instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and fail-fast: the first error aborts the parse and no partial tree escapes.
/// - The cursor only moves forward; it never rewinds.
/// - One `Parser` handles exactly one token stream.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    types: TypeTable,
    /// Descriptors of the classes declared so far, for class-instance expressions.
    classes: HashMap<Ident, StructType>,
    /// Current nesting level, bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser whose type table holds the default primitives.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `cinder_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_types(tokens, TypeTable::new())
    }

    /// Create a parser with an explicit seed type table.
    pub fn with_types(tokens: &'a [Token], types: TypeTable) -> Self {
        Self {
            tokens,
            pos: 0,
            types,
            classes: HashMap::new(),
            depth: 0,
        }
    }

    /// The type table as it stands: the seed plus every class declared so far.
    pub fn type_table(&self) -> &TypeTable {
        &self.types
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(mut self) -> ParseResult<Program> {
        self.parse_program()
    }

    /// Parse the entire token stream, keeping the parser (and its grown type table) available afterwards.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            let decl = if self.at_class_word() {
                Declaration::Class(self.class_decl()?)
            } else {
                Declaration::Function(self.function_decl()?)
            };
            declarations.push(decl);
        }

        Ok(Program { declarations })
    }

    /// Return `true` if the current token is the contextual word `class`.
    fn at_class_word(&self) -> bool {
        self.current()
            .is_some_and(|t| t.kind == TokenKind::Identifier && t.text == keywords::CLASS_WORD)
    }
}
