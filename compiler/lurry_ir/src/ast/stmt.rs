//! Statement nodes.

use std::sync::Arc;

use super::{Expr, Ident};
use crate::Position;

/// An ordered statement list that runs in its own scope.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }
}

/// Shared shape of `fun` and mapper declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Block,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    /// `var name = init;` (a missing initializer parses as `null`).
    Var {
        name: Ident,
        initializer: Expr,
    },
    Print(Expr),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    Block(Block),
    Function(Arc<FunctionDecl>),
    /// Top-level `name(keys) { ... }`, applied to one row at a time.
    Mapper(Arc<FunctionDecl>),
    Return {
        value: Option<Expr>,
        pos: Position,
    },
    Import {
        alias: Ident,
        path: String,
    },
}
