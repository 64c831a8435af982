//! Runtime values.

use std::fmt;
use std::rc::Rc;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::function::FunctionValue;
use crate::host::{HostObject, HostType};

/// A value produced by evaluation.
///
/// Numeric kinds mirror the promotion lattice
/// (int < long < float < double < bigint < bigdecimal).
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(Rc<BigInt>),
    BigDecimal(Rc<BigDecimal>),
    Str(Rc<str>),
    Bytes(Rc<[u8]>),
    Function(Rc<FunctionValue>),
    Mapper(Rc<FunctionValue>),
    /// A host type bound by `import`; calling it constructs an object.
    Type(Rc<HostType>),
    Object(HostObject),
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn big_int(n: BigInt) -> Self {
        Value::BigInt(Rc::new(n))
    }

    pub fn big_decimal(n: BigDecimal) -> Self {
        Value::BigDecimal(Rc::new(n))
    }

    pub fn bytes(b: impl Into<Rc<[u8]>>) -> Self {
        Value::Bytes(b.into())
    }

    /// Name used in error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Double(_) => "double",
            Value::BigInt(_) => "bigint",
            Value::BigDecimal(_) => "bigdecimal",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Function(_) => "function",
            Value::Mapper(_) => "mapper",
            Value::Type(_) => "type",
            Value::Object(obj) => obj.host_type().path(),
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Strict equality: same variant and same contents.
///
/// Language-level `==` (which compares numbers across kinds) lives in
/// [`crate::values_equal`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::BigDecimal(a), Value::BigDecimal(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Function(a), Value::Function(b)) | (Value::Mapper(a), Value::Mapper(b)) => {
                Rc::ptr_eq(a, b)
            }
            (Value::Type(a), Value::Type(b)) => Rc::ptr_eq(a, b) || a.path() == b.path(),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_finite() => f.write_str(&with_fraction(x.to_string())),
            Value::Float(x) => f.write_str(&format_float(f64::from(*x))),
            Value::Double(x) => f.write_str(&format_float(*x)),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::BigDecimal(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bytes(b) => {
                f.write_str("0x")?;
                for byte in b.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::Function(func) => write!(f, "<fun {}>", func.name()),
            Value::Mapper(mapper) => write!(f, "<mapper {}>", mapper.name()),
            Value::Type(ty) => write!(f, "<type {}>", ty.path()),
            Value::Object(obj) => write!(f, "<{} object>", obj.host_type().path()),
        }
    }
}

/// Render a float the way the JVM does: whole values keep a `.0`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    with_fraction(x.to_string())
}

fn with_fraction(text: String) -> String {
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Double(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}
