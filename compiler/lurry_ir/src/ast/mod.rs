//! Syntax tree for Lurry templates.
//!
//! Expressions and statements are closed sum types. Consumers (interpreter,
//! printer) match on them exhaustively.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Ident, Literal};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{Block, FunctionDecl, Stmt};
