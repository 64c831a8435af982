//! Parse error types.

use lurry_diagnostic::{Diagnostic, ErrorCode};
use lurry_ir::{Position, TokenKind};

/// Fatal parse error with the offending token's position.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub pos: Position,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A specific token was required. `expected` reads like "')' after arguments".
    #[error("expect {expected}, found {found}")]
    Expected {
        expected: &'static str,
        found: TokenKind,
    },

    #[error("expect expression, found {found}")]
    ExpectedExpression { found: TokenKind },

    #[error("expect {what}, found {found}")]
    ExpectedIdentifier {
        what: &'static str,
        found: TokenKind,
    },

    #[error("expect '}}' after block")]
    UnclosedBlock,

    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("expect '{{' or '=' before function body")]
    MissingFunctionBody,

    #[error("unsupported construct: '{keyword}' is not supported")]
    UnsupportedConstruct { keyword: &'static str },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, pos: Position) -> Self {
        ParseError { kind, pos }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::Expected { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedBlock => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::InvalidAssignmentTarget => ErrorCode::E1005,
            ParseErrorKind::MissingFunctionBody => ErrorCode::E1006,
            ParseErrorKind::UnsupportedConstruct { .. } => ErrorCode::E1007,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at(self.pos);
        match self.kind {
            ParseErrorKind::UnsupportedConstruct { .. } => {
                diag.with_note("loops are not part of the template language")
            }
            _ => diag,
        }
    }
}
