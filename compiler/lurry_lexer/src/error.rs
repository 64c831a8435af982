use lurry_diagnostic::{Diagnostic, ErrorCode};
use lurry_ir::Position;

/// Fatal tokenization error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Input ended before the closing quote; `pos` is the end of input.
    #[error("unterminated string at {pos}")]
    UnterminatedString { pos: Position },

    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedCharacter { ch: char, pos: Position },

    /// Decimal literal too large for a double.
    #[error("number literal out of range at {pos}")]
    NumberOutOfRange { pos: Position },
}

impl LexError {
    pub fn pos(&self) -> Position {
        match self {
            LexError::UnterminatedString { pos }
            | LexError::UnexpectedCharacter { pos, .. }
            | LexError::NumberOutOfRange { pos } => *pos,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnterminatedString { pos } => Diagnostic::error(ErrorCode::E0001)
                .with_message("unterminated string")
                .at(*pos),
            LexError::UnexpectedCharacter { ch, pos } => Diagnostic::error(ErrorCode::E0002)
                .with_message(format!("unexpected character '{ch}'"))
                .at(*pos),
            LexError::NumberOutOfRange { pos } => Diagnostic::error(ErrorCode::E0003)
                .with_message("number literal out of range")
                .at(*pos),
        }
    }
}
