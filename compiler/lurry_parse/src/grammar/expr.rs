//! Expression parsing.
//!
//! One method per precedence level. Binary levels are left-associative
//! loops; assignment is right-associative.

use lurry_ir::{BinaryOp, Expr, ExprKind, Literal, LogicalOp, TokenKind, TokenValue, UnaryOp};
use lurry_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse an expression (lowest precedence).
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// `name = value`, right-associative. Only a bare variable may be assigned.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let target = self.parse_or()?;
        if !self.cursor.check(TokenKind::Equal) {
            return Ok(target);
        }
        let equals = self.cursor.advance().pos;
        let value = self.parse_assignment()?;
        match target.kind {
            ExprKind::Variable(name) => {
                let pos = name.pos;
                Ok(Expr::new(
                    ExprKind::Assign {
                        name,
                        value: Box::new(value),
                    },
                    pos,
                ))
            }
            _ => Err(ParseError::new(
                ParseErrorKind::InvalidAssignmentTarget,
                equals,
            )),
        }
    }

    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and()?;
        while self.cursor.check(TokenKind::Or) {
            let pos = self.cursor.advance().pos;
            let right = self.parse_and()?;
            left = logical(LogicalOp::Or, left, right, pos);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;
        while self.cursor.check(TokenKind::And) {
            let pos = self.cursor.advance().pos;
            let right = self.parse_equality()?;
            left = logical(LogicalOp::And, left, right, pos);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::EqualEqual => Some(BinaryOp::Eq),
                TokenKind::BangEqual => Some(BinaryOp::NotEq),
                _ => None,
            },
            Self::parse_comparison,
        )
    }

    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::Less => Some(BinaryOp::Lt),
                TokenKind::LessEqual => Some(BinaryOp::LtEq),
                TokenKind::Greater => Some(BinaryOp::Gt),
                TokenKind::GreaterEqual => Some(BinaryOp::GtEq),
                _ => None,
            },
            Self::parse_term,
        )
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::Plus => Some(BinaryOp::Add),
                TokenKind::Minus => Some(BinaryOp::Sub),
                _ => None,
            },
            Self::parse_factor,
        )
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_level(
            |kind| match kind {
                TokenKind::Star => Some(BinaryOp::Mul),
                TokenKind::Slash => Some(BinaryOp::Div),
                _ => None,
            },
            Self::parse_unary,
        )
    }

    /// Left-associative loop shared by the binary levels.
    fn parse_binary_level(
        &mut self,
        op_for: fn(TokenKind) -> Option<BinaryOp>,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while let Some(op) = op_for(self.cursor.current_kind()) {
            let pos = self.cursor.advance().pos;
            let right = next(self)?;
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                pos,
            );
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.parse_call(),
        };
        let pos = self.cursor.advance().pos;
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            pos,
        ))
    }

    /// Primary followed by any chain of `(args)`, `.name(args)`,
    /// `.name = value` and `.name`.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::LeftParen => {
                    let pos = self.cursor.advance().pos;
                    let args = self.parse_arguments()?;
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        pos,
                    );
                }
                TokenKind::Dot => {
                    self.cursor.advance();
                    let name = self.expect_ident("property name after '.'")?;
                    let pos = name.pos;
                    let receiver = Box::new(expr);
                    let kind = if self.cursor.eat(TokenKind::LeftParen) {
                        ExprKind::MethodCall {
                            receiver,
                            method: name,
                            args: self.parse_arguments()?,
                        }
                    } else if self.cursor.eat(TokenKind::Equal) {
                        ExprKind::FieldCall {
                            receiver,
                            field: name,
                            value: Some(Box::new(self.parse_expression()?)),
                        }
                    } else {
                        ExprKind::FieldCall {
                            receiver,
                            field: name,
                            value: None,
                        }
                    };
                    expr = Expr::new(kind, pos);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// Comma-separated arguments through the closing `)` (the `(` is consumed).
    fn parse_arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                args.push(self.parse_expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "')' after arguments")?;
        Ok(args)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        trace!(kind = ?token.kind, "parse_primary");
        let literal = match token.kind {
            TokenKind::False => Literal::Bool(false),
            TokenKind::True => Literal::Bool(true),
            TokenKind::Null => Literal::Null,
            TokenKind::Number => match &token.value {
                TokenValue::Integer(n) => Literal::Int(*n),
                TokenValue::BigInteger(digits) => Literal::BigInt(digits.clone()),
                TokenValue::Float(x) => Literal::Float(*x),
                TokenValue::Empty | TokenValue::Text(_) => {
                    return Err(self.error(ParseErrorKind::ExpectedExpression {
                        found: token.kind,
                    }))
                }
            },
            TokenKind::String => Literal::Str(token.text().unwrap_or_default().to_owned()),
            TokenKind::Identifier => {
                let name = self.expect_ident("identifier")?;
                let pos = name.pos;
                return Ok(Expr::new(ExprKind::Variable(name), pos));
            }
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RightParen, "')' after expression")?;
                return Ok(Expr::new(ExprKind::Grouping(Box::new(inner)), token.pos));
            }
            found => return Err(self.error(ParseErrorKind::ExpectedExpression { found })),
        };
        self.cursor.advance();
        Ok(Expr::new(ExprKind::Literal(literal), token.pos))
    }
}

fn logical(op: LogicalOp, left: Expr, right: Expr, pos: lurry_ir::Position) -> Expr {
    Expr::new(
        ExprKind::Logical {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        pos,
    )
}
