//! Recursive descent parser for Lurry templates.
//!
//! Consumes the lexer's token list (which must end in `EOF`) and produces the
//! ordered top-level statements of a template. Parsing stops at the first
//! error; no partial tree is returned.
//!
//! Precedence, lowest to highest:
//! assignment, `||`, `&&`, equality, comparison, `+ -`, `* /`, unary,
//! call/member access, primary.

mod cursor;
mod error;
mod grammar;

use lurry_ir::{Stmt, Token};

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Parse a token list into template statements.
pub fn parse(tokens: &[Token]) -> Result<Vec<Stmt>, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Build an error at the current token.
    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.cursor.error_pos())
    }
}

#[cfg(test)]
mod tests;
