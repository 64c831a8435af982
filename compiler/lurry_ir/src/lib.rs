//! Lurry IR - tokens and syntax tree.
//!
//! This crate holds the data shared by every stage of the template pipeline:
//! - [`Position`] for source locations (line/column)
//! - [`Token`], [`TokenKind`] and [`TokenValue`] for lexer output
//! - The statement and expression tree ([`Stmt`], [`Expr`]) built by the parser
//!
//! The tree is a plain owned tree: every node exclusively owns its children.
//! Function and mapper declarations sit behind an `Arc` so the interpreter can
//! capture a body in a closure value without copying it.

pub mod ast;
mod position;
mod token;

pub use ast::{
    BinaryOp, Block, Expr, ExprKind, FunctionDecl, Ident, Literal, LogicalOp, Stmt, UnaryOp,
};
pub use position::Position;
pub use token::{Token, TokenKind, TokenValue};
