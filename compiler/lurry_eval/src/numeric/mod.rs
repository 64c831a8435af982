//! Numeric promotion and per-kind arithmetic.
//!
//! A binary operation on two numbers first picks the promoted
//! [`NumericKind`] of its operands, then coerces both operands into that
//! kind's representation and applies the kind's [`NumericOps`].

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::BigDecimal;
use lurry_ir::{BinaryOp, UnaryOp};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::errors::{
    division_by_zero, integer_overflow, numeric_conversion, unsupported_operand, EvalError,
    EvalResult,
};
use crate::Value;

/// Numeric kinds in promotion rank order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    Int,
    Long,
    Float,
    Double,
    BigInt,
    BigDecimal,
}

impl NumericKind {
    /// Kind of a numeric value, `None` for everything else.
    pub fn of(value: &Value) -> Option<NumericKind> {
        Some(match value {
            Value::Int(_) => NumericKind::Int,
            Value::Long(_) => NumericKind::Long,
            Value::Float(_) => NumericKind::Float,
            Value::Double(_) => NumericKind::Double,
            Value::BigInt(_) => NumericKind::BigInt,
            Value::BigDecimal(_) => NumericKind::BigDecimal,
            _ => return None,
        })
    }

    /// The kind whose arithmetic governs an operation on `a` and `b`.
    ///
    /// The higher rank wins, except that a big integer meeting a binary
    /// float needs a fractional part and becomes a big decimal.
    pub fn promote(a: NumericKind, b: NumericKind) -> NumericKind {
        match (a.max(b), a.min(b)) {
            (NumericKind::BigInt, NumericKind::Float | NumericKind::Double) => {
                NumericKind::BigDecimal
            }
            (higher, _) => higher,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumericKind::Int => "int",
            NumericKind::Long => "long",
            NumericKind::Float => "float",
            NumericKind::Double => "double",
            NumericKind::BigInt => "bigint",
            NumericKind::BigDecimal => "bigdecimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Arithmetic for one numeric kind.
trait NumericOps {
    type Repr;

    /// Widen a value of this kind or any lower-ranked kind.
    fn coerce(value: &Value) -> Result<Self::Repr, EvalError>;
    fn wrap(repr: Self::Repr) -> Value;

    fn add(a: Self::Repr, b: Self::Repr) -> Result<Self::Repr, EvalError>;
    fn sub(a: Self::Repr, b: Self::Repr) -> Result<Self::Repr, EvalError>;
    fn mul(a: Self::Repr, b: Self::Repr) -> Result<Self::Repr, EvalError>;
    fn div(a: Self::Repr, b: Self::Repr) -> Result<Self::Repr, EvalError>;
    fn neg(a: Self::Repr) -> Result<Self::Repr, EvalError>;
    fn compare(a: &Self::Repr, b: &Self::Repr) -> Ordering;
}

fn apply<K: NumericOps>(op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    let a = K::coerce(left)?;
    let b = K::coerce(right)?;
    match op {
        BinaryOp::Add => K::add(a, b).map(K::wrap),
        BinaryOp::Sub => K::sub(a, b).map(K::wrap),
        BinaryOp::Mul => K::mul(a, b).map(K::wrap),
        BinaryOp::Div => K::div(a, b).map(K::wrap),
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq => Ok(Value::Bool(op_matches(op, K::compare(&a, &b)))),
    }
}

/// Whether `ordering` satisfies a comparison operator.
pub(crate) fn op_matches(op: BinaryOp, ordering: Ordering) -> bool {
    match op {
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => false,
    }
}

/// Apply `op` to two numeric operands under the given promoted kind.
pub fn binary(kind: NumericKind, op: BinaryOp, left: &Value, right: &Value) -> EvalResult {
    match kind {
        NumericKind::Int => apply::<IntOps>(op, left, right),
        NumericKind::Long => apply::<LongOps>(op, left, right),
        NumericKind::Float => apply::<FloatOps>(op, left, right),
        NumericKind::Double => apply::<DoubleOps>(op, left, right),
        NumericKind::BigInt => apply::<BigIntOps>(op, left, right),
        NumericKind::BigDecimal => apply::<BigDecimalOps>(op, left, right),
    }
}

/// Negate a numeric value, keeping its kind.
pub fn negate(value: &Value) -> EvalResult {
    fn run<K: NumericOps>(value: &Value) -> EvalResult {
        K::neg(K::coerce(value)?).map(K::wrap)
    }
    match NumericKind::of(value) {
        Some(NumericKind::Int) => run::<IntOps>(value),
        Some(NumericKind::Long) => run::<LongOps>(value),
        Some(NumericKind::Float) => run::<FloatOps>(value),
        Some(NumericKind::Double) => run::<DoubleOps>(value),
        Some(NumericKind::BigInt) => run::<BigIntOps>(value),
        Some(NumericKind::BigDecimal) => run::<BigDecimalOps>(value),
        None => Err(unsupported_operand(UnaryOp::Neg.as_symbol(), value)),
    }
}

fn checked<T>(result: Option<T>, operation: &'static str) -> Result<T, EvalError> {
    result.ok_or_else(|| integer_overflow(operation))
}

struct IntOps;

impl NumericOps for IntOps {
    type Repr = i32;

    fn coerce(value: &Value) -> Result<i32, EvalError> {
        match value {
            Value::Int(n) => Ok(*n),
            other => Err(numeric_conversion(other, "int")),
        }
    }

    fn wrap(repr: i32) -> Value {
        Value::Int(repr)
    }

    fn add(a: i32, b: i32) -> Result<i32, EvalError> {
        checked(a.checked_add(b), "addition")
    }

    fn sub(a: i32, b: i32) -> Result<i32, EvalError> {
        checked(a.checked_sub(b), "subtraction")
    }

    fn mul(a: i32, b: i32) -> Result<i32, EvalError> {
        checked(a.checked_mul(b), "multiplication")
    }

    fn div(a: i32, b: i32) -> Result<i32, EvalError> {
        if b == 0 {
            return Err(division_by_zero());
        }
        checked(a.checked_div(b), "division")
    }

    fn neg(a: i32) -> Result<i32, EvalError> {
        checked(a.checked_neg(), "negation")
    }

    fn compare(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }
}

struct LongOps;

impl NumericOps for LongOps {
    type Repr = i64;

    fn coerce(value: &Value) -> Result<i64, EvalError> {
        match value {
            Value::Int(n) => Ok(i64::from(*n)),
            Value::Long(n) => Ok(*n),
            other => Err(numeric_conversion(other, "long")),
        }
    }

    fn wrap(repr: i64) -> Value {
        Value::Long(repr)
    }

    fn add(a: i64, b: i64) -> Result<i64, EvalError> {
        checked(a.checked_add(b), "addition")
    }

    fn sub(a: i64, b: i64) -> Result<i64, EvalError> {
        checked(a.checked_sub(b), "subtraction")
    }

    fn mul(a: i64, b: i64) -> Result<i64, EvalError> {
        checked(a.checked_mul(b), "multiplication")
    }

    fn div(a: i64, b: i64) -> Result<i64, EvalError> {
        if b == 0 {
            return Err(division_by_zero());
        }
        checked(a.checked_div(b), "division")
    }

    fn neg(a: i64) -> Result<i64, EvalError> {
        checked(a.checked_neg(), "negation")
    }

    fn compare(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}

struct FloatOps;

impl NumericOps for FloatOps {
    type Repr = f32;

    #[allow(clippy::cast_precision_loss)]
    fn coerce(value: &Value) -> Result<f32, EvalError> {
        match value {
            Value::Int(n) => Ok(*n as f32),
            Value::Long(n) => Ok(*n as f32),
            Value::Float(x) => Ok(*x),
            other => Err(numeric_conversion(other, "float")),
        }
    }

    fn wrap(repr: f32) -> Value {
        Value::Float(repr)
    }

    fn add(a: f32, b: f32) -> Result<f32, EvalError> {
        Ok(a + b)
    }

    fn sub(a: f32, b: f32) -> Result<f32, EvalError> {
        Ok(a - b)
    }

    fn mul(a: f32, b: f32) -> Result<f32, EvalError> {
        Ok(a * b)
    }

    fn div(a: f32, b: f32) -> Result<f32, EvalError> {
        Ok(a / b)
    }

    fn neg(a: f32) -> Result<f32, EvalError> {
        Ok(-a)
    }

    fn compare(a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}

struct DoubleOps;

impl NumericOps for DoubleOps {
    type Repr = f64;

    #[allow(clippy::cast_precision_loss)]
    fn coerce(value: &Value) -> Result<f64, EvalError> {
        match value {
            Value::Int(n) => Ok(f64::from(*n)),
            Value::Long(n) => Ok(*n as f64),
            Value::Float(x) => Ok(f64::from(*x)),
            Value::Double(x) => Ok(*x),
            other => Err(numeric_conversion(other, "double")),
        }
    }

    fn wrap(repr: f64) -> Value {
        Value::Double(repr)
    }

    fn add(a: f64, b: f64) -> Result<f64, EvalError> {
        Ok(a + b)
    }

    fn sub(a: f64, b: f64) -> Result<f64, EvalError> {
        Ok(a - b)
    }

    fn mul(a: f64, b: f64) -> Result<f64, EvalError> {
        Ok(a * b)
    }

    fn div(a: f64, b: f64) -> Result<f64, EvalError> {
        Ok(a / b)
    }

    fn neg(a: f64) -> Result<f64, EvalError> {
        Ok(-a)
    }

    fn compare(a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

struct BigIntOps;

impl NumericOps for BigIntOps {
    type Repr = BigInt;

    fn coerce(value: &Value) -> Result<BigInt, EvalError> {
        match value {
            Value::Int(n) => Ok(BigInt::from(*n)),
            Value::Long(n) => Ok(BigInt::from(*n)),
            Value::BigInt(n) => Ok(n.as_ref().clone()),
            other => Err(numeric_conversion(other, "bigint")),
        }
    }

    fn wrap(repr: BigInt) -> Value {
        Value::big_int(repr)
    }

    fn add(a: BigInt, b: BigInt) -> Result<BigInt, EvalError> {
        Ok(a + b)
    }

    fn sub(a: BigInt, b: BigInt) -> Result<BigInt, EvalError> {
        Ok(a - b)
    }

    fn mul(a: BigInt, b: BigInt) -> Result<BigInt, EvalError> {
        Ok(a * b)
    }

    fn div(a: BigInt, b: BigInt) -> Result<BigInt, EvalError> {
        if b.is_zero() {
            return Err(division_by_zero());
        }
        Ok(a / b)
    }

    fn neg(a: BigInt) -> Result<BigInt, EvalError> {
        Ok(-a)
    }

    fn compare(a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }
}

struct BigDecimalOps;

impl NumericOps for BigDecimalOps {
    type Repr = BigDecimal;

    fn coerce(value: &Value) -> Result<BigDecimal, EvalError> {
        match value {
            Value::Int(n) => Ok(BigDecimal::from(*n)),
            Value::Long(n) => Ok(BigDecimal::from(*n)),
            // Through the shortest decimal text, so 0.1 stays 0.1.
            Value::Float(_) | Value::Double(_) => value
                .to_string()
                .parse::<BigDecimal>()
                .map_err(|_| numeric_conversion(value, "bigdecimal")),
            Value::BigInt(n) => Ok(BigDecimal::new(n.as_ref().clone(), 0)),
            Value::BigDecimal(n) => Ok(n.as_ref().clone()),
            other => Err(numeric_conversion(other, "bigdecimal")),
        }
    }

    fn wrap(repr: BigDecimal) -> Value {
        Value::big_decimal(repr)
    }

    fn add(a: BigDecimal, b: BigDecimal) -> Result<BigDecimal, EvalError> {
        Ok(a + b)
    }

    fn sub(a: BigDecimal, b: BigDecimal) -> Result<BigDecimal, EvalError> {
        Ok(a - b)
    }

    fn mul(a: BigDecimal, b: BigDecimal) -> Result<BigDecimal, EvalError> {
        Ok(a * b)
    }

    fn div(a: BigDecimal, b: BigDecimal) -> Result<BigDecimal, EvalError> {
        if b.is_zero() {
            return Err(division_by_zero());
        }
        Ok(a / b)
    }

    fn neg(a: BigDecimal) -> Result<BigDecimal, EvalError> {
        Ok(-a)
    }

    fn compare(a: &BigDecimal, b: &BigDecimal) -> Ordering {
        a.cmp(b)
    }
}
