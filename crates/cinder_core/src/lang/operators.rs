//! Operator vocabulary.
//!
//! This module defines the operator spellings the grammar understands along with their precedence level and fixity.
//! It also owns the operator *character* set the lexer munches into operator tokens.
//!
//! ## Notes
//! - The lexer accepts any maximal run of [`OPERATOR_CHARS`] as one token (so `+-*` is a single token). Only runs
//!   that appear in [`OPERATORS`] have an [`OperatorId`]; the parser rejects the rest contextually.
//! - `^` lives on the multiplicative level and is left-associative.
//!
//! ## Examples
//! ```rust
//! use cinder_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::info_for(OperatorId::Caret).precedence, Precedence::Multiplicative);
//! assert!(operators::is_operator_char('!'));
//! ```

/// Every character that may appear in an operator token.
pub const OPERATOR_CHARS: &str = "+-*/%^<>=!.";

/// Binding level of an operator, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Assignment,
    Comparison,
    Additive,
    Multiplicative,
    /// `++` / `--`, both prefix and postfix.
    Unary,
    /// `.` member access.
    Access,
}

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define where an operator sits relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    /// Usable before or after an operand.
    Affix,
}

/// Stable identifier for every operator, in [`OPERATORS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Eq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    PlusPlus,
    MinusMinus,
    Dot,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub precedence: Precedence,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Registry of all operators, in [`OperatorId`] order.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Eq, "=", Precedence::Assignment, Associativity::Right, Fixity::Infix),
    op(OperatorId::EqEq, "==", Precedence::Comparison, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", Precedence::Comparison, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", Precedence::Comparison, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", Precedence::Comparison, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", Precedence::Comparison, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", Precedence::Comparison, Associativity::Left, Fixity::Infix),
    op(OperatorId::Plus, "+", Precedence::Additive, Associativity::Left, Fixity::Infix),
    op(OperatorId::Minus, "-", Precedence::Additive, Associativity::Left, Fixity::Infix),
    op(OperatorId::Star, "*", Precedence::Multiplicative, Associativity::Left, Fixity::Infix),
    op(OperatorId::Slash, "/", Precedence::Multiplicative, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, "%", Precedence::Multiplicative, Associativity::Left, Fixity::Infix),
    op(OperatorId::Caret, "^", Precedence::Multiplicative, Associativity::Left, Fixity::Infix),
    op(OperatorId::PlusPlus, "++", Precedence::Unary, Associativity::Right, Fixity::Affix),
    op(OperatorId::MinusMinus, "--", Precedence::Unary, Associativity::Right, Fixity::Affix),
    op(OperatorId::Dot, ".", Precedence::Access, Associativity::Left, Fixity::Infix),
];

/// Return `true` if `c` can be part of an operator token.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

/// Metadata for an operator id.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Lookup by exact spelling.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

/// Lookup a binary operator on the given precedence level.
///
/// ## Returns
/// - `Some(OperatorId)` if `s` spells an infix operator at exactly `level`.
/// - `None` otherwise, including for unknown spellings.
pub fn binary_at(level: Precedence, s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spelling == s && o.precedence == level && o.fixity == Fixity::Infix)
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    precedence: Precedence,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        precedence,
        associativity,
        fixity,
    }
}
