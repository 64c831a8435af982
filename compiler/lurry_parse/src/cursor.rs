//! Token cursor for navigating the token stream.

use lurry_ir::{Position, Token, TokenKind, TokenValue};

static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    value: TokenValue::Empty,
    pos: Position::NONE,
};

/// Cursor over a token slice.
///
/// Reads past the end yield the `EOF` sentinel, so a slice missing its
/// trailing `EOF` still parses to completion.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Kind of the token `n` places ahead of the current one.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume and return the current token. Never moves past `EOF`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Position to report for an error at the current token.
    ///
    /// The `EOF` sentinel carries no position, so errors there point at the
    /// last real token instead.
    pub fn error_pos(&self) -> Position {
        let current = self.current();
        if current.kind != TokenKind::Eof || self.pos == 0 {
            return current.pos;
        }
        self.tokens
            .get(self.pos - 1)
            .map_or(Position::NONE, |t| t.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, column: u32) -> Token {
        Token::simple(kind, Position::new(1, column))
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let tokens = vec![tok(TokenKind::Var, 0), Token::eof()];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance().kind, TokenKind::Var);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.advance().kind, TokenKind::Eof);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_missing_eof_is_synthesized() {
        let tokens = vec![tok(TokenKind::Semicolon, 0)];
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.eat(TokenKind::Semicolon));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek_kind(3), TokenKind::Eof);
    }

    #[test]
    fn test_peek_and_eat() {
        let tokens = vec![
            tok(TokenKind::Identifier, 0),
            tok(TokenKind::LeftParen, 1),
            Token::eof(),
        ];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.peek_kind(1), TokenKind::LeftParen);
        assert!(!cursor.eat(TokenKind::LeftParen));
        assert!(cursor.eat(TokenKind::Identifier));
        assert!(cursor.check(TokenKind::LeftParen));
    }

    #[test]
    fn test_error_pos_at_eof_uses_previous_token() {
        let tokens = vec![tok(TokenKind::LeftParen, 7), Token::eof()];
        let mut cursor = Cursor::new(&tokens);
        cursor.advance();
        assert_eq!(cursor.error_pos(), Position::new(1, 7));
    }
}
