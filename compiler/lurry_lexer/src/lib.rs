//! Lexer for Lurry templates using logos.
//!
//! Produces a flat `Vec<Token>` ending in an `EOF` sentinel. Whitespace and
//! `//` line comments are skipped. Identifiers are matched first and then
//! remapped to keyword kinds by exact text, so `variable` stays an
//! identifier while `var` becomes [`TokenKind::Var`].
//!
//! Tokenizing stops at the first error; no partial token list is returned.

mod error;
mod escape;
mod line_index;
mod raw_token;

use logos::Logos;
use lurry_ir::{Token, TokenKind, TokenValue};
use tracing::debug;

pub use error::LexError;
pub use escape::unescape;
pub use line_index::LineIndex;
use raw_token::RawToken;

/// Tokenize template source.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).lex_all()
}

/// Single-pass lexer over one template source.
pub struct Lexer<'src> {
    source: &'src str,
    lines: LineIndex,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            lines: LineIndex::new(source),
        }
    }

    /// Lex the whole source, appending the `EOF` sentinel.
    pub fn lex_all(&self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut logos = RawToken::lexer(self.source);

        while let Some(token_result) = logos.next() {
            let span = logos.span();
            let pos = self.lines.position(span.start);
            let slice = logos.slice();

            match token_result {
                Ok(RawToken::UnterminatedString) => {
                    return Err(LexError::UnterminatedString {
                        pos: self.lines.end_position(),
                    });
                }
                Ok(RawToken::Float(x)) if !x.is_finite() => {
                    return Err(LexError::NumberOutOfRange { pos });
                }
                Ok(raw) => {
                    let (kind, value) = convert_token(raw, slice);
                    tokens.push(Token::new(kind, value, pos));
                }
                Err(()) => {
                    let ch = slice.chars().next().unwrap_or('\0');
                    return Err(LexError::UnexpectedCharacter { ch, pos });
                }
            }
        }

        tokens.push(Token::eof());
        debug!(tokens = tokens.len(), "tokenized template");
        Ok(tokens)
    }
}

fn convert_token(raw: RawToken, slice: &str) -> (TokenKind, TokenValue) {
    let kind = match raw {
        RawToken::Integer => {
            let value = match slice.parse::<i64>() {
                Ok(n) => TokenValue::Integer(n),
                Err(_) => TokenValue::BigInteger(slice.to_owned()),
            };
            return (TokenKind::Number, value);
        }
        RawToken::Float(x) => return (TokenKind::Number, TokenValue::Float(x)),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            return (TokenKind::String, TokenValue::Text(unescape(content)));
        }
        RawToken::Ident => {
            if let Some(keyword) = TokenKind::keyword(slice) {
                return (keyword, TokenValue::Empty);
            }
            return (TokenKind::Identifier, TokenValue::Text(slice.to_owned()));
        }
        RawToken::ColumnRef => {
            return (TokenKind::Identifier, TokenValue::Text(slice.to_owned()));
        }

        RawToken::LParen => TokenKind::LeftParen,
        RawToken::RParen => TokenKind::RightParen,
        RawToken::LBrace => TokenKind::LeftBrace,
        RawToken::RBrace => TokenKind::RightBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Star => TokenKind::Star,
        RawToken::Bang => TokenKind::Bang,
        RawToken::BangEq => TokenKind::BangEqual,
        RawToken::Eq => TokenKind::Equal,
        RawToken::EqEq => TokenKind::EqualEqual,
        RawToken::Gt => TokenKind::Greater,
        RawToken::GtEq => TokenKind::GreaterEqual,
        RawToken::Lt => TokenKind::Less,
        RawToken::LtEq => TokenKind::LessEqual,
        RawToken::Amp => TokenKind::Ampersand,
        RawToken::AmpAmp => TokenKind::And,
        RawToken::Pipe => TokenKind::VerticalBar,
        RawToken::PipePipe => TokenKind::Or,

        // Handled before conversion.
        RawToken::UnterminatedString => TokenKind::Eof,
    };
    (kind, TokenValue::Empty)
}

#[cfg(test)]
mod tests;
