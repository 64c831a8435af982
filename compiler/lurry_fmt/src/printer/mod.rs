//! Canonical source rendering.
//!
//! Output re-parses to a tree that renders to the same text:
//!
//! - binary and logical expressions are always parenthesized, so no
//!   precedence knowledge is needed when reading the output back
//! - a grouping around an already parenthesized expression adds nothing
//! - receivers and callees that are not postfix-safe (unary, assignment)
//!   are parenthesized
//! - an expression statement used as an `if` branch is braced when its text
//!   would otherwise continue the condition (`(` or `-`)
//! - blocks are indented by [`INDENT_WIDTH`] spaces, one statement per line

use lurry_ir::{Block, Expr, ExprKind, FunctionDecl, Literal, Stmt};
use lurry_stack::ensure_sufficient_stack;

use crate::emitter::{Emitter, StringEmitter};

pub const INDENT_WIDTH: usize = 4;

pub struct Printer<E: Emitter> {
    emitter: E,
    depth: usize,
}

impl Printer<StringEmitter> {
    pub fn new() -> Self {
        Printer::with_emitter(StringEmitter::new())
    }
}

impl Default for Printer<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> Printer<E> {
    pub fn with_emitter(emitter: E) -> Self {
        Printer { emitter, depth: 0 }
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }

    /// Statements one per line, without a trailing newline.
    pub fn program(&mut self, statements: &[Stmt]) {
        for (i, stmt) in statements.iter().enumerate() {
            if i > 0 {
                self.newline();
            }
            self.stmt(stmt);
        }
    }

    pub fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.stmt_inner(stmt));
    }

    fn stmt_inner(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => {
                self.expr(expr);
                self.emitter.emit(";");
            }
            Stmt::Var { name, initializer } => {
                self.emitter.emit("var ");
                self.emitter.emit(&name.name);
                self.emitter.emit(" = ");
                self.expr(initializer);
                self.emitter.emit(";");
            }
            Stmt::Print(expr) => {
                self.emitter.emit("println ");
                self.expr(expr);
                self.emitter.emit(";");
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.emitter.emit("if ");
                self.expr(condition);
                self.emitter.emit_space();
                self.branch(then_branch);
                if let Some(else_branch) = else_branch {
                    self.emitter.emit(" else ");
                    self.stmt(else_branch);
                }
            }
            Stmt::Block(block) => self.block(block),
            Stmt::Function(decl) => {
                self.emitter.emit("fun ");
                self.function(decl);
            }
            Stmt::Mapper(decl) => self.function(decl),
            Stmt::Return { value, .. } => match value {
                Some(value) => {
                    self.emitter.emit("return ");
                    self.expr(value);
                    self.emitter.emit(";");
                }
                None => self.emitter.emit("return;"),
            },
            Stmt::Import { alias, path } => {
                self.emitter.emit("import ");
                self.emitter.emit(path);
                if path.rsplit('.').next() != Some(alias.name.as_str()) {
                    self.emitter.emit(" as ");
                    self.emitter.emit(&alias.name);
                }
                self.emitter.emit(";");
            }
        }
    }

    fn branch(&mut self, stmt: &Stmt) {
        if let Stmt::Expression(expr) = stmt {
            let text = crate::format_expr(expr);
            if text.starts_with('(') || text.starts_with('-') {
                self.block(&Block::new(vec![stmt.clone()]));
                return;
            }
        }
        self.stmt(stmt);
    }

    fn function(&mut self, decl: &FunctionDecl) {
        self.emitter.emit(&decl.name.name);
        self.emitter.emit("(");
        for (i, param) in decl.params.iter().enumerate() {
            if i > 0 {
                self.emitter.emit(", ");
            }
            self.emitter.emit(&param.name);
        }
        self.emitter.emit(") ");
        self.block(&decl.body);
    }

    fn block(&mut self, block: &Block) {
        if block.statements.is_empty() {
            self.emitter.emit("{}");
            return;
        }
        self.emitter.emit("{");
        self.depth += 1;
        for stmt in &block.statements {
            self.newline();
            self.stmt(stmt);
        }
        self.depth -= 1;
        self.newline();
        self.emitter.emit("}");
    }

    fn newline(&mut self) {
        self.emitter.emit_newline();
        self.emitter.emit_indent(self.depth * INDENT_WIDTH);
    }

    pub fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(literal) => self.literal(literal),
            ExprKind::Binary { op, left, right } => {
                self.infix(left, op.as_symbol(), right);
            }
            ExprKind::Logical { op, left, right } => {
                self.infix(left, op.as_symbol(), right);
            }
            ExprKind::Unary { op, operand } => {
                self.emitter.emit(op.as_symbol());
                self.operand(operand);
            }
            ExprKind::Grouping(inner) => {
                if inner.is_parenthesized() {
                    self.expr(inner);
                } else {
                    self.emitter.emit("(");
                    self.expr(inner);
                    self.emitter.emit(")");
                }
            }
            ExprKind::Variable(name) => self.emitter.emit(&name.name),
            ExprKind::Assign { name, value } => {
                self.emitter.emit(&name.name);
                self.emitter.emit(" = ");
                self.expr(value);
            }
            ExprKind::Call { callee, args } => {
                self.operand(callee);
                self.args(args);
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                self.operand(receiver);
                self.emitter.emit(".");
                self.emitter.emit(&method.name);
                self.args(args);
            }
            ExprKind::FieldCall {
                receiver,
                field,
                value,
            } => {
                self.operand(receiver);
                self.emitter.emit(".");
                self.emitter.emit(&field.name);
                if let Some(value) = value {
                    self.emitter.emit(" = ");
                    self.expr(value);
                }
            }
        }
    }

    fn infix(&mut self, left: &Expr, op: &str, right: &Expr) {
        self.emitter.emit("(");
        self.expr(left);
        self.emitter.emit_space();
        self.emitter.emit(op);
        self.emitter.emit_space();
        self.expr(right);
        self.emitter.emit(")");
    }

    /// An operand of a prefix or postfix form.
    fn operand(&mut self, expr: &Expr) {
        let bare = matches!(
            expr.kind,
            ExprKind::Unary { .. } | ExprKind::Assign { .. }
        ) || matches!(
            expr.kind,
            ExprKind::FieldCall { value: Some(_), .. }
        );
        if bare {
            self.emitter.emit("(");
            self.expr(expr);
            self.emitter.emit(")");
        } else {
            self.expr(expr);
        }
    }

    fn args(&mut self, args: &[Expr]) {
        self.emitter.emit("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.emitter.emit(", ");
            }
            self.expr(arg);
        }
        self.emitter.emit(")");
    }

    fn literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Null => self.emitter.emit("null"),
            Literal::Bool(b) => self.emitter.emit(if *b { "true" } else { "false" }),
            Literal::Int(n) => self.emitter.emit(&n.to_string()),
            Literal::BigInt(text) => self.emitter.emit(text),
            Literal::Float(x) => self.emitter.emit(&float_text(*x)),
            Literal::Str(s) => self.emitter.emit(&quote(s)),
        }
    }
}

/// Decimal text that lexes back as a float literal.
pub(crate) fn float_text(x: f64) -> String {
    let text = x.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Double-quoted with `\\ \" \n \t \r` escaped.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests;
