//! Indented tree dump of a parsed program
//!
//! Walks the AST and writes one node per line, children one level deeper than their parent. Labelled children
//! (`Condition:`, `Body:`, ...) put the label one level down and the child two levels down.

use cinder_syntax::ast::*;

use super::config::DumpConfig;
use super::writer::TreeWriter;

/// Renders a [`Program`] as an indented tree
pub struct TreeDumper {
    writer: TreeWriter,
}

impl TreeDumper {
    /// Create a new dumper with the given config
    pub fn new(config: DumpConfig) -> Self {
        Self {
            writer: TreeWriter::new(config),
        }
    }

    /// Dump a program and return the text
    pub fn dump(mut self, program: &Program) -> String {
        for (i, decl) in program.declarations.iter().enumerate() {
            if i > 0 && self.writer.config().blank_line_between_declarations {
                self.writer.blank_line();
            }
            self.declaration(decl);
        }
        self.writer.finish()
    }

    /// Dump a single statement subtree
    pub fn dump_statement(mut self, stmt: &Statement) -> String {
        self.statement(stmt);
        self.writer.finish()
    }

    /// Dump a single expression subtree
    pub fn dump_expr(mut self, expr: &Expr) -> String {
        self.expr(expr);
        self.writer.finish()
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Function(f) => self.function(f),
            Declaration::Class(c) => self.class(c),
        }
    }

    fn function(&mut self, f: &FunctionDecl) {
        self.writer.line(&format!("FunctionDecl({})", f.name));
        self.writer.nested(|w| {
            w.line(&format!("Return Type: {}", f.return_type));
            if f.params.is_empty() {
                w.line("Params: (none)");
            } else {
                let params: Vec<String> = f.params.iter().map(|p| format!("{} {}", p.ty, p.name)).collect();
                w.line(&format!("Params: {}", params.join(", ")));
            }
        });
        self.labelled("Body:", |d| d.statement(&f.body));
    }

    fn class(&mut self, c: &ClassDecl) {
        self.writer.line(&format!("Class({})", c.name));
        self.writer.nested(|w| {
            for (name, ty) in &c.ty.fields {
                w.line(&format!("{}: {}", name, ty));
            }
        });
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Block(stmts) => {
                self.writer.line("CompoundStmt");
                self.children(|d| {
                    for s in stmts {
                        d.statement(s);
                    }
                });
            }
            Statement::Expr(e) => {
                self.writer.line("ExprStmt");
                self.children(|d| d.expr(e));
            }
            Statement::If(s) => {
                self.writer.line("IfStmt");
                self.labelled("Condition:", |d| d.expr(&s.condition));
                self.labelled("Then:", |d| d.statement(&s.then_branch));
                if let Some(else_branch) = &s.else_branch {
                    self.labelled("Else:", |d| d.statement(else_branch));
                }
            }
            Statement::While(s) => {
                self.writer.line("WhileStmt");
                self.labelled("Condition:", |d| d.expr(&s.condition));
                self.labelled("Body:", |d| d.statement(&s.body));
            }
            Statement::For(s) => {
                self.writer.line("ForStmt");
                self.labelled("Initializer:", |d| d.expr(&s.init));
                self.labelled("Condition:", |d| d.expr(&s.condition));
                self.labelled("Incrementor:", |d| d.expr(&s.step));
                self.labelled("Body:", |d| d.statement(&s.body));
            }
            Statement::Return(value) => {
                self.writer.line("ReturnStmt");
                match value {
                    Some(e) => self.labelled("Expression:", |d| d.expr(e)),
                    None => self.writer.nested(|w| w.line("No expression (return)")),
                }
            }
            Statement::Definition(s) => {
                self.writer.line("DefinitionStmt");
                self.writer.nested(|w| w.line(&format!("dataType: {}", s.ty)));
                self.labelled("Initializer:", |d| d.expr(&s.initializer));
            }
            Statement::Break => self.writer.line("BreakStmt"),
            Statement::Continue => self.writer.line("ContinueStmt"),
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(v) => self.writer.line(&format!("Literal({})", v)),
            Expr::Variable(name) => self.writer.line(&format!("identifier({})", name)),
            Expr::Binary(lhs, op, rhs) => {
                self.writer.line(&format!("BinaryExpr({})", op));
                self.children(|d| {
                    d.expr(lhs);
                    d.expr(rhs);
                });
            }
            Expr::Prefix(op, operand) => {
                self.writer.line(&format!("PrefixExpr({})", op));
                self.children(|d| d.expr(operand));
            }
            Expr::Postfix(op, operand) => {
                self.writer.line(&format!("PostfixExpr({})", op));
                self.children(|d| d.expr(operand));
            }
            Expr::Index(target, index) => {
                self.writer.line("IndexExpr");
                self.labelled("Target:", |d| d.expr(target));
                self.labelled("Index:", |d| d.expr(index));
            }
            Expr::Call(callee, args) => {
                self.writer.line("FunctionCallExpr");
                self.labelled("Callee:", |d| d.expr(callee));
                if args.is_empty() {
                    self.labelled("Arguments:", |d| d.writer.line("No arguments."));
                } else {
                    self.labelled("Arguments:", |d| {
                        for arg in args {
                            d.expr(arg);
                        }
                    });
                }
            }
            Expr::Field(object, field) => {
                self.writer.line("ClassFieldAccessExpr");
                self.labelled("Parent:", |d| d.expr(object));
                self.writer.nested(|w| w.line(&format!("Field: {}", field)));
            }
            Expr::ClassInstance(inst) => {
                self.writer.line(&format!("StructInstanceExpr({})", inst.ty.name));
                for (name, value) in &inst.fields {
                    self.labelled(&format!("{} =", name), |d| d.expr(value));
                }
            }
        }
    }

    // ========================================================================
    // Layout helpers
    // ========================================================================

    /// Run `f` one level deeper.
    fn children(&mut self, f: impl FnOnce(&mut Self)) {
        self.writer.indent();
        f(self);
        self.writer.dedent();
    }

    /// Write `label` one level deeper and run `f` two levels deeper.
    fn labelled(&mut self, label: &str, f: impl FnOnce(&mut Self)) {
        self.writer.indent();
        self.writer.line(label);
        self.children(f);
        self.writer.dedent();
    }
}
