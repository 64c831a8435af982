//! Binary and unary operator evaluation.
//!
//! Numbers go through the promotion table in [`crate::numeric`]. Strings get
//! concatenation, repetition and ordering; booleans get equality, ordering
//! and `!`. Every other combination is an unsupported-operand error naming
//! the operator and the operand types.

use lurry_ir::{BinaryOp, UnaryOp};

use crate::errors::{non_boolean_operand, unsupported_operands};
use crate::numeric::{self, op_matches, NumericKind};
use crate::{EvalResult, Value};

/// Evaluate `left op right` on already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(values_equal(left, right))),
        BinaryOp::NotEq => return Ok(Value::Bool(!values_equal(left, right))),
        BinaryOp::Add if left.is_str() || right.is_str() => {
            return Ok(Value::string(format!("{left}{right}")));
        }
        _ => {}
    }

    if let (Some(a), Some(b)) = (NumericKind::of(left), NumericKind::of(right)) {
        return numeric::binary(NumericKind::promote(a, b), op, left, right);
    }

    match (left, right) {
        (Value::Str(s), Value::Int(_) | Value::Long(_)) if op == BinaryOp::Mul => {
            repeat(s, left, right)
        }
        (Value::Str(a), Value::Str(b)) if op.is_ordering() => {
            Ok(Value::Bool(op_matches(op, a.cmp(b))))
        }
        (Value::Bool(a), Value::Bool(b)) if op.is_ordering() => {
            Ok(Value::Bool(op_matches(op, a.cmp(b))))
        }
        _ => Err(unsupported_operands(op.as_symbol(), left, right)),
    }
}

fn repeat(s: &str, left: &Value, right: &Value) -> EvalResult {
    let count = match right {
        Value::Int(n) => usize::try_from(*n).ok(),
        Value::Long(n) => usize::try_from(*n).ok(),
        _ => None,
    };
    count
        .map(|n| Value::string(s.repeat(n)))
        .ok_or_else(|| unsupported_operands(BinaryOp::Mul.as_symbol(), left, right))
}

/// Language-level equality: numbers compare by value across kinds, every
/// other pair compares structurally.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (NumericKind::of(left), NumericKind::of(right)) {
        (Some(a), Some(b)) => matches!(
            numeric::binary(NumericKind::promote(a, b), BinaryOp::Eq, left, right),
            Ok(Value::Bool(true))
        ),
        _ => left == right,
    }
}

/// Evaluate a unary operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> EvalResult {
    match op {
        UnaryOp::Neg => numeric::negate(operand),
        UnaryOp::Not => match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            other => Err(non_boolean_operand(op.as_symbol(), other)),
        },
    }
}
