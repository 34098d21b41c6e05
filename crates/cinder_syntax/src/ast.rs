//! Abstract Syntax Tree definitions for Cinder
//!
//! One sum type per node family (expressions, statements, declarations) plus the structural type descriptors
//! classes are built from. Every parent owns its children (`Box` / `Vec`); the tree is acyclic and nothing is
//! shared.

use cinder_core::lang::operators::{self, OperatorId};
use std::fmt;

/// Identifier spelling.
pub type Ident = String;

/// A program is a sequence of top-level declarations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub declarations: Vec<Declaration>,
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Function(FunctionDecl),
    Class(ClassDecl),
}

// ============================================================================
// Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: Vec<Param>,
    pub return_type: Ident,
    /// Any single statement; usually a block.
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: Ident,
}

// ============================================================================
// Classes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Ident,
    pub ty: StructType,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A type from the primitive seed: `float`, `void`, ...
    Primitive(Ident),
    /// Nominal reference to a declared class. Not resolved or checked for cycles.
    Named(Ident),
    Struct(StructType),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Type::Primitive(name) | Type::Named(name) => name,
            Type::Struct(s) => &s.name,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named record type with ordered, uniquely named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub name: Ident,
    pub fields: Vec<(Ident, Type)>,
}

impl StructType {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Returns `false` (and leaves the struct unchanged) if the name is taken.
    pub fn add_field(&mut self, name: impl Into<Ident>, ty: Type) -> bool {
        let name = name.into();
        if self.field(&name).is_some() {
            return false;
        }
        self.fields.push((name, ty));
        true
    }

    pub fn field(&self, name: &str) -> Option<&Type> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, ty)| ty)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `{ ... }`
    Block(Vec<Statement>),
    /// `expr;`
    Expr(Expr),
    /// `if (cond) stmt [else stmt]`
    If(IfStmt),
    /// `while (cond) stmt`
    While(WhileStmt),
    /// `for (init; cond; step) stmt`
    For(ForStmt),
    /// `return [expr];`
    Return(Option<Expr>),
    /// `Type expr;`, e.g. `float x = 1;`
    Definition(DefinitionStmt),
    Break,
    Continue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Expr,
    pub condition: Expr,
    pub step: Expr,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionStmt {
    pub ty: Ident,
    pub initializer: Expr,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(i64),
    Variable(Ident),
    Binary(Box<Expr>, BinaryOp, Box<Expr>),
    /// `++x`, `--x`
    Prefix(UnaryOp, Box<Expr>),
    /// `x++`, `x--`
    Postfix(UnaryOp, Box<Expr>),
    /// `target[index]`
    Index(Box<Expr>, Box<Expr>),
    /// `callee(args...)`
    Call(Box<Expr>, Vec<Expr>),
    /// `object.field`
    Field(Box<Expr>, Ident),
    /// `Point { x: 1, y: 2 }`
    ClassInstance(ClassInstanceExpr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassInstanceExpr {
    /// Copy of the class descriptor at the point of construction.
    pub ty: StructType,
    /// Field initializers in source order.
    pub fields: Vec<(Ident, Expr)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Assign,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    /// `^`, grouped with the multiplicative operators.
    Caret,
}

impl BinaryOp {
    /// Map an infix operator id onto its AST operator.
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        Some(match id {
            OperatorId::Eq => BinaryOp::Assign,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::NotEq,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::LtEq => BinaryOp::LtEq,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::GtEq => BinaryOp::GtEq,
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Div,
            OperatorId::Percent => BinaryOp::Mod,
            OperatorId::Caret => BinaryOp::Caret,
            OperatorId::PlusPlus | OperatorId::MinusMinus | OperatorId::Dot => return None,
        })
    }

    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Assign => OperatorId::Eq,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Mod => OperatorId::Percent,
            BinaryOp::Caret => OperatorId::Caret,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", operators::as_str(self.operator_id()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl UnaryOp {
    pub fn from_operator(id: OperatorId) -> Option<Self> {
        match id {
            OperatorId::PlusPlus => Some(UnaryOp::Increment),
            OperatorId::MinusMinus => Some(UnaryOp::Decrement),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Increment => write!(f, "++"),
            UnaryOp::Decrement => write!(f, "--"),
        }
    }
}
