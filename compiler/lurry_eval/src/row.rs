//! Bridge from tabular rows to interpreter bindings.
//!
//! A [`Row`] exposes column metadata plus typed accessors. [`column_value`]
//! picks the accessor matching the column's [`SqlType`]; [`row_bindings`]
//! turns a whole row into the `#column` bindings a mapper body reads.

use bigdecimal::BigDecimal;

use crate::Value;

/// SQL type tag of a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SqlType {
    Char,
    Varchar,
    LongVarchar,
    Numeric,
    Decimal,
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Float,
    Double,
    Binary,
    VarBinary,
    LongVarBinary,
    Blob,
    Date,
    Time,
    Timestamp,
    Array,
    Null,
    Other,
}

/// Read-only view of one result row. Columns are indexed from 0.
///
/// Accessors return `None` for a SQL NULL cell.
pub trait Row {
    fn column_count(&self) -> usize;
    fn column_name(&self, index: usize) -> &str;
    fn column_type(&self, index: usize) -> SqlType;

    fn get_string(&self, index: usize) -> Option<String>;
    fn get_decimal(&self, index: usize) -> Option<BigDecimal>;
    fn get_bool(&self, index: usize) -> Option<bool>;
    fn get_int(&self, index: usize) -> Option<i32>;
    fn get_long(&self, index: usize) -> Option<i64>;
    fn get_float(&self, index: usize) -> Option<f32>;
    fn get_double(&self, index: usize) -> Option<f64>;
    fn get_bytes(&self, index: usize) -> Option<Vec<u8>>;

    /// Index of the column named `name`, ignoring ASCII case.
    fn find_column(&self, name: &str) -> Option<usize> {
        (0..self.column_count()).find(|&i| self.column_name(i).eq_ignore_ascii_case(name))
    }
}

/// Convert one cell according to its column type.
pub fn column_value(row: &dyn Row, index: usize) -> Value {
    let value = match row.column_type(index) {
        SqlType::Char
        | SqlType::Varchar
        | SqlType::LongVarchar
        | SqlType::Date
        | SqlType::Time
        | SqlType::Timestamp
        | SqlType::Array
        | SqlType::Other => row.get_string(index).map(Value::from),
        SqlType::Numeric | SqlType::Decimal => row.get_decimal(index).map(Value::big_decimal),
        SqlType::Bit => row.get_bool(index).map(Value::Bool),
        SqlType::TinyInt | SqlType::SmallInt | SqlType::Integer => {
            row.get_int(index).map(Value::Int)
        }
        SqlType::BigInt => row.get_long(index).map(Value::Long),
        SqlType::Real | SqlType::Float => row.get_float(index).map(Value::Float),
        SqlType::Double => row.get_double(index).map(Value::Double),
        SqlType::Binary | SqlType::VarBinary | SqlType::LongVarBinary | SqlType::Blob => {
            row.get_bytes(index).map(Value::bytes)
        }
        SqlType::Null => None,
    };
    value.unwrap_or(Value::Null)
}

/// One `("#" + column name, value)` pair per column, in column order.
pub fn row_bindings(row: &dyn Row) -> Vec<(String, Value)> {
    (0..row.column_count())
        .map(|i| (format!("#{}", row.column_name(i)), column_value(row, i)))
        .collect()
}

/// In-memory [`Row`] holding already-converted values.
#[derive(Clone, Debug, Default)]
pub struct MemoryRow {
    columns: Vec<(String, SqlType, Value)>,
}

impl MemoryRow {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, ty: SqlType, value: impl Into<Value>) -> Self {
        self.columns.push((name.into(), ty, value.into()));
        self
    }

    fn value(&self, index: usize) -> Option<&Value> {
        self.columns
            .get(index)
            .map(|(_, _, value)| value)
            .filter(|value| !value.is_null())
    }
}

impl Row for MemoryRow {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, index: usize) -> &str {
        self.columns.get(index).map_or("", |(name, _, _)| name)
    }

    fn column_type(&self, index: usize) -> SqlType {
        self.columns.get(index).map_or(SqlType::Null, |(_, ty, _)| *ty)
    }

    fn get_string(&self, index: usize) -> Option<String> {
        self.value(index).map(ToString::to_string)
    }

    fn get_decimal(&self, index: usize) -> Option<BigDecimal> {
        match self.value(index)? {
            Value::BigDecimal(n) => Some(n.as_ref().clone()),
            Value::Int(n) => Some(BigDecimal::from(*n)),
            Value::Long(n) => Some(BigDecimal::from(*n)),
            other => other.to_string().parse().ok(),
        }
    }

    fn get_bool(&self, index: usize) -> Option<bool> {
        self.value(index)?.as_bool()
    }

    fn get_int(&self, index: usize) -> Option<i32> {
        match self.value(index)? {
            Value::Int(n) => Some(*n),
            Value::Long(n) => i32::try_from(*n).ok(),
            _ => None,
        }
    }

    fn get_long(&self, index: usize) -> Option<i64> {
        match self.value(index)? {
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn get_float(&self, index: usize) -> Option<f32> {
        match self.value(index)? {
            Value::Float(x) => Some(*x),
            Value::Double(x) => Some(*x as f32),
            _ => None,
        }
    }

    fn get_double(&self, index: usize) -> Option<f64> {
        match self.value(index)? {
            Value::Float(x) => Some(f64::from(*x)),
            Value::Double(x) => Some(*x),
            _ => None,
        }
    }

    fn get_bytes(&self, index: usize) -> Option<Vec<u8>> {
        match self.value(index)? {
            Value::Bytes(b) => Some(b.to_vec()),
            Value::Str(s) => Some(s.as_bytes().to_vec()),
            _ => None,
        }
    }
}

impl From<Vec<(String, SqlType, Value)>> for MemoryRow {
    fn from(columns: Vec<(String, SqlType, Value)>) -> Self {
        MemoryRow { columns }
    }
}
