//! Declaration and statement grammar.

mod expr;

use std::sync::Arc;

use lurry_ir::{Block, Expr, ExprKind, FunctionDecl, Ident, Literal, Stmt, TokenKind};
use lurry_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse top-level statements until `EOF`.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_top_level()?);
        }
        debug!(statements = statements.len(), "parsed template");
        Ok(statements)
    }

    /// Top level additionally accepts mapper declarations and imports.
    fn parse_top_level(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Identifier if self.at_mapper_header() => {
                let decl = self.parse_function_decl()?;
                Ok(Stmt::Mapper(Arc::new(decl)))
            }
            TokenKind::Import => self.parse_import(),
            _ => self.parse_declaration(),
        }
    }

    /// `name ( ident, ... )` followed by `{` or `=`.
    ///
    /// Scans ahead without consuming, so a call statement such as
    /// `log(x);` still parses as an expression.
    fn at_mapper_header(&self) -> bool {
        if self.cursor.peek_kind(1) != TokenKind::LeftParen {
            return false;
        }
        let mut i = 2;
        if self.cursor.peek_kind(i) == TokenKind::RightParen {
            i += 1;
        } else {
            loop {
                if self.cursor.peek_kind(i) != TokenKind::Identifier {
                    return false;
                }
                i += 1;
                match self.cursor.peek_kind(i) {
                    TokenKind::Comma => i += 1,
                    TokenKind::RightParen => {
                        i += 1;
                        break;
                    }
                    _ => return false,
                }
            }
        }
        matches!(
            self.cursor.peek_kind(i),
            TokenKind::LeftBrace | TokenKind::Equal
        )
    }

    /// Blocks and `if` branches recurse through here, so nesting depth is
    /// bounded only by memory.
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_declaration_inner())
    }

    fn parse_declaration_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var => self.parse_var(),
            TokenKind::Fun => {
                self.cursor.advance();
                let decl = self.parse_function_decl()?;
                Ok(Stmt::Function(Arc::new(decl)))
            }
            _ => self.parse_statement(),
        }
    }

    /// `var name [= expr] [;]`
    fn parse_var(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let name = self.expect_ident("variable name")?;
        let initializer = if self.cursor.eat(TokenKind::Equal) {
            self.parse_expression()?
        } else {
            Expr::new(ExprKind::Literal(Literal::Null), name.pos)
        };
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Stmt::Var { name, initializer })
    }

    /// `name(params) { block }` or `name(params) = expr [;]`.
    ///
    /// The `= expr` form desugars to a body of `return expr;`.
    fn parse_function_decl(&mut self) -> Result<FunctionDecl, ParseError> {
        let name = self.expect_ident("function name")?;
        self.expect(TokenKind::LeftParen, "'(' after function name")?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RightParen) {
            loop {
                params.push(self.expect_ident("parameter name")?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightParen, "')' after parameters")?;

        let body = match self.cursor.current_kind() {
            TokenKind::Equal => {
                let pos = self.cursor.advance().pos;
                let value = self.parse_expression()?;
                self.cursor.eat(TokenKind::Semicolon);
                Block::new(vec![Stmt::Return {
                    value: Some(value),
                    pos,
                }])
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                self.parse_block_body()?
            }
            _ => return Err(self.error(ParseErrorKind::MissingFunctionBody)),
        };
        trace!(name = %name.name, params = params.len(), "parsed function");
        Ok(FunctionDecl { name, params, body })
    }

    /// `import a.b.C [as alias] [;]`
    fn parse_import(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let mut last = self.expect_ident("type path after import")?;
        let mut path = last.name.clone();
        while self.cursor.eat(TokenKind::Dot) {
            last = self.expect_ident("type path segment after '.'")?;
            path.push('.');
            path.push_str(&last.name);
        }
        let alias = if self.cursor.check(TokenKind::Identifier)
            && self.cursor.current().text() == Some("as")
        {
            self.cursor.advance();
            self.expect_ident("alias after 'as'")?
        } else {
            last
        };
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Stmt::Import { alias, path })
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Stmt, ParseError> {
        let kind = self.cursor.current_kind();
        trace!(?kind, pos = %self.cursor.current().pos, "parse_statement");
        match kind {
            TokenKind::Print => {
                self.cursor.advance();
                let value = self.parse_expression()?;
                self.cursor.eat(TokenKind::Semicolon);
                Ok(Stmt::Print(value))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::For => Err(self.error(ParseErrorKind::UnsupportedConstruct {
                keyword: "for",
            })),
            TokenKind::While => Err(self.error(ParseErrorKind::UnsupportedConstruct {
                keyword: "while",
            })),
            TokenKind::Return => self.parse_return(),
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.parse_block_body()?))
            }
            _ => {
                let expr = self.parse_expression()?;
                self.cursor.eat(TokenKind::Semicolon);
                Ok(Stmt::Expression(expr))
            }
        }
    }

    /// `if cond then-stmt [else else-stmt]`; `else` binds to the nearest `if`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.advance();
        let condition = self.parse_expression()?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `return [expr] [;]`; bare when followed by `}`, `;` or end of input.
    fn parse_return(&mut self) -> Result<Stmt, ParseError> {
        let pos = self.cursor.advance().pos;
        let value = match self.cursor.current_kind() {
            TokenKind::RightBrace | TokenKind::Semicolon | TokenKind::Eof => None,
            _ => Some(self.parse_expression()?),
        };
        self.cursor.eat(TokenKind::Semicolon);
        Ok(Stmt::Return { value, pos })
    }

    /// Statements up to the closing `}` (the `{` is already consumed).
    fn parse_block_body(&mut self) -> Result<Block, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            statements.push(self.parse_declaration()?);
        }
        if !self.cursor.eat(TokenKind::RightBrace) {
            return Err(self.error(ParseErrorKind::UnclosedBlock));
        }
        Ok(Block::new(statements))
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if self.cursor.eat(kind) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::Expected {
                expected,
                found: self.cursor.current_kind(),
            }))
        }
    }

    fn expect_ident(&mut self, what: &'static str) -> Result<Ident, ParseError> {
        let token = self.cursor.current();
        if token.kind != TokenKind::Identifier {
            return Err(self.error(ParseErrorKind::ExpectedIdentifier {
                what,
                found: token.kind,
            }));
        }
        self.cursor.advance();
        Ok(Ident::new(token.text().unwrap_or_default(), token.pos))
    }
}
