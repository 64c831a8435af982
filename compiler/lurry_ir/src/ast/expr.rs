//! Expression nodes.

use super::{BinaryOp, LogicalOp, UnaryOp};
use crate::Position;

/// An identifier occurrence with its source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Ident {
    pub name: String,
    pub pos: Position,
}

impl Ident {
    pub fn new(name: impl Into<String>, pos: Position) -> Self {
        Ident {
            name: name.into(),
            pos,
        }
    }
}

/// Literal values as written in source.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    /// Integer that fits in 64 bits.
    Int(i64),
    /// Integer digits too large for 64 bits.
    BigInt(String),
    Float(f64),
    Str(String),
}

/// Expression node, tagged with the position of its defining token.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub pos: Position,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, pos: Position) -> Self {
        Expr { kind, pos }
    }

    /// Whether the printed form of this node is already wrapped in parentheses.
    pub fn is_parenthesized(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Binary { .. } | ExprKind::Logical { .. } | ExprKind::Grouping(_)
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Grouping(Box<Expr>),
    Variable(Ident),
    Assign {
        name: Ident,
        value: Box<Expr>,
    },
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    MethodCall {
        receiver: Box<Expr>,
        method: Ident,
        args: Vec<Expr>,
    },
    /// Field read when `value` is `None`, field write otherwise.
    FieldCall {
        receiver: Box<Expr>,
        field: Ident,
        value: Option<Box<Expr>>,
    },
}
