//! Token types for the Lurry lexer.

use super::Position;
use std::fmt;

/// A token with its position in the source.
///
/// Immutable once produced by the lexer.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub pos: Position,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, value: TokenValue, pos: Position) -> Self {
        Token { kind, value, pos }
    }

    /// A token without a literal value.
    #[inline]
    pub fn simple(kind: TokenKind, pos: Position) -> Self {
        Token {
            kind,
            value: TokenValue::Empty,
            pos,
        }
    }

    /// The end-of-stream sentinel, value-less at position (0,0).
    pub fn eof() -> Self {
        Token::simple(TokenKind::Eof, Position::NONE)
    }

    /// Identifier or string text carried by this token, if any.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) | TokenValue::BigInteger(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} @ {}", self.pos)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            TokenValue::Empty => write!(f, "{}", self.kind),
            value => write!(f, "{}({value})", self.kind),
        }
    }
}

/// Literal payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    Empty,
    /// Identifier text or decoded string literal.
    Text(String),
    /// Integer literal that fits in 64 bits.
    Integer(i64),
    /// Integer literal too large for 64 bits, kept as its digits.
    BigInteger(String),
    /// Literal containing a `.`.
    Float(f64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Empty => Ok(()),
            TokenValue::Text(text) | TokenValue::BigInteger(text) => f.write_str(text),
            TokenValue::Integer(n) => write!(f, "{n}"),
            TokenValue::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Token kinds for Lurry.
///
/// Two-character operators (`==`, `!=`, `<=`, `>=`, `&&`, `||`) have their own
/// kinds; the single-character forms are distinct tokens.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Ampersand,
    And,
    VerticalBar,
    Or,

    // Literals
    Identifier,
    String,
    Number,
    True,
    False,
    Null,

    // Keywords
    Var,
    Fun,
    If,
    Else,
    For,
    While,
    Return,
    Import,
    Print,

    Eof,
}

impl TokenKind {
    /// Keyword kind for an identifier's text, if it is reserved.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "null" => TokenKind::Null,
            "var" => TokenKind::Var,
            "fun" => TokenKind::Fun,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "while" => TokenKind::While,
            "return" => TokenKind::Return,
            "import" => TokenKind::Import,
            "println" => TokenKind::Print,
            _ => return None,
        })
    }

    /// Upper-case name used in token dumps and parse errors.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::And => "AND",
            TokenKind::VerticalBar => "VERTICAL_BAR",
            TokenKind::Or => "OR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::Var => "VAR",
            TokenKind::Fun => "FUN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RETURN",
            TokenKind::Import => "IMPORT",
            TokenKind::Print => "PRINT",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests;
