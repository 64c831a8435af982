//! Interpretation errors.
//!
//! Errors are built through the factory functions below, which fill in the
//! structured [`EvalErrorKind`] and leave the position unset. The interpreter
//! attaches the position of the innermost node being evaluated with
//! [`EvalError::at`].

use std::fmt;

use lurry_diagnostic::{Diagnostic, ErrorCode};
use lurry_ir::Position;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    #[error("unsupported operation '{op}' between {left} and {right}")]
    UnsupportedOperands {
        op: &'static str,
        left: String,
        right: String,
    },

    #[error("unsupported operation '{op}' on {operand}")]
    UnsupportedOperand { op: &'static str, operand: String },

    #[error("operator '{op}' requires boolean operands, got {type_name}")]
    NonBooleanOperand { op: &'static str, type_name: String },

    #[error("expected boolean condition, got {type_name}")]
    NonBooleanCondition { type_name: String },

    #[error("{name} expects {expected} argument(s), got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("cannot convert {value} to {target}")]
    NumericConversion { value: String, target: &'static str },

    #[error("member '{member}' not found on {type_name}")]
    MemberNotFound { member: String, type_name: String },

    #[error("constructor of {type_name} taking {arity} argument(s) not found")]
    ConstructorNotFound { type_name: String, arity: usize },

    #[error("null receiver: cannot access '{member}' on null")]
    NullReceiver { member: String },

    #[error("can only call functions or constructors, not {type_name}")]
    NotCallable { type_name: String },

    #[error("mapper '{name}' can only be applied to a row")]
    MapperNotCallable { name: String },

    #[error("type not found: {path}")]
    TypeNotFound { path: String },

    #[error("{member} failed: {message}")]
    HostCall { member: String, message: String },

    #[error("maximum call depth exceeded (limit: {depth})")]
    StackOverflow { depth: usize },

    #[error("function '{name}' outlived its defining scope")]
    ScopeExpired { name: String },

    #[error("row has no column '{column}'")]
    MissingColumn { column: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E2001,
            Self::UnsupportedOperands { .. }
            | Self::UnsupportedOperand { .. }
            | Self::NumericConversion { .. } => ErrorCode::E2002,
            Self::NonBooleanOperand { .. } | Self::NonBooleanCondition { .. } => ErrorCode::E2003,
            Self::ArityMismatch { .. } => ErrorCode::E2004,
            Self::DivisionByZero => ErrorCode::E2005,
            Self::IntegerOverflow { .. } => ErrorCode::E2006,
            Self::MemberNotFound { .. } => ErrorCode::E2007,
            Self::ConstructorNotFound { .. } => ErrorCode::E2008,
            Self::NullReceiver { .. } => ErrorCode::E2009,
            Self::NotCallable { .. } | Self::MapperNotCallable { .. } => ErrorCode::E2010,
            Self::TypeNotFound { .. } => ErrorCode::E2011,
            Self::HostCall { .. } => ErrorCode::E2012,
            Self::StackOverflow { .. } => ErrorCode::E2013,
            Self::ScopeExpired { .. } => ErrorCode::E2014,
            Self::MissingColumn { .. } => ErrorCode::E2015,
        }
    }
}

/// Fatal interpretation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Source position, `Position::NONE` until attached.
    pub pos: Position,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            pos: Position::NONE,
        }
    }

    /// Attach `pos` unless a more precise position is already set.
    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        if self.pos.is_none() {
            self.pos = pos;
        }
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.code())
            .with_message(self.kind.to_string())
            .at(self.pos)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pos.is_none() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at {}", self.kind, self.pos)
        }
    }
}

impl std::error::Error for EvalError {}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Variables

pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_owned(),
    }
    .into()
}

// Operators

pub fn unsupported_operands(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalErrorKind::UnsupportedOperands {
        op,
        left: left.type_name().to_owned(),
        right: right.type_name().to_owned(),
    }
    .into()
}

pub fn unsupported_operand(op: &'static str, operand: &Value) -> EvalError {
    EvalErrorKind::UnsupportedOperand {
        op,
        operand: operand.type_name().to_owned(),
    }
    .into()
}

pub fn non_boolean_operand(op: &'static str, value: &Value) -> EvalError {
    EvalErrorKind::NonBooleanOperand {
        op,
        type_name: value.type_name().to_owned(),
    }
    .into()
}

pub fn non_boolean_condition(value: &Value) -> EvalError {
    EvalErrorKind::NonBooleanCondition {
        type_name: value.type_name().to_owned(),
    }
    .into()
}

pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

pub fn numeric_conversion(value: &Value, target: &'static str) -> EvalError {
    EvalErrorKind::NumericConversion {
        value: value.to_string(),
        target,
    }
    .into()
}

// Calls

pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
    .into()
}

pub fn not_callable(value: &Value) -> EvalError {
    EvalErrorKind::NotCallable {
        type_name: value.type_name().to_owned(),
    }
    .into()
}

pub fn mapper_not_callable(name: &str) -> EvalError {
    EvalErrorKind::MapperNotCallable {
        name: name.to_owned(),
    }
    .into()
}

pub fn stack_overflow(depth: usize) -> EvalError {
    EvalErrorKind::StackOverflow { depth }.into()
}

pub fn scope_expired(name: &str) -> EvalError {
    EvalErrorKind::ScopeExpired {
        name: name.to_owned(),
    }
    .into()
}

// Host objects

pub fn member_not_found(member: &str, type_name: &str) -> EvalError {
    EvalErrorKind::MemberNotFound {
        member: member.to_owned(),
        type_name: type_name.to_owned(),
    }
    .into()
}

pub fn constructor_not_found(type_name: &str, arity: usize) -> EvalError {
    EvalErrorKind::ConstructorNotFound {
        type_name: type_name.to_owned(),
        arity,
    }
    .into()
}

pub fn null_receiver(member: &str) -> EvalError {
    EvalErrorKind::NullReceiver {
        member: member.to_owned(),
    }
    .into()
}

pub fn type_not_found(path: &str) -> EvalError {
    EvalErrorKind::TypeNotFound {
        path: path.to_owned(),
    }
    .into()
}

pub fn host_call_failed(member: &str, message: impl Into<String>) -> EvalError {
    EvalErrorKind::HostCall {
        member: member.to_owned(),
        message: message.into(),
    }
    .into()
}

// Rows

pub fn missing_column(column: &str) -> EvalError {
    EvalErrorKind::MissingColumn {
        column: column.to_owned(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_attached_once() {
        let err = undefined_variable("x")
            .at(Position::new(2, 3))
            .at(Position::new(1, 0));
        assert_eq!(err.pos, Position::new(2, 3));
        assert_eq!(err.to_string(), "undefined variable 'x' at 2:3");
    }

    #[test]
    fn test_display_without_position() {
        assert_eq!(division_by_zero().to_string(), "division by zero");
    }

    #[test]
    fn test_operand_errors_name_types() {
        let err = unsupported_operands("<", &Value::Int(1), &Value::string("x"));
        assert_eq!(
            err.kind.to_string(),
            "unsupported operation '<' between int and string"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let diag = arity_mismatch("add", 2, 1)
            .at(Position::new(4, 1))
            .to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E2004);
        assert_eq!(diag.message, "add expects 2 argument(s), got 1");
        assert_eq!(diag.pos, Position::new(4, 1));
    }
}
