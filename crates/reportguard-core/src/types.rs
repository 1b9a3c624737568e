use std::fmt;

use indexmap::IndexMap;

/// One record of a CSV file, fields in source column order.
pub type Row = IndexMap<String, Value>;
/// Every row of one file, in source order.
pub type Dataset = Vec<Row>;

/// A single cell value as produced by the extraction layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Empty cell or an NA marker (NaN)
    Missing,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "string",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Missing => "missing",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// True only for a literal empty string. Missing values are not empty.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }

    /// Value equality as used by the comparators.
    ///
    /// Integers and floats compare numerically, text never equals a number and
    /// `Missing` never equals anything, itself included.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                *a as f64 == *b
            }
            _ => false,
        }
    }

    /// Hash key consistent with [`Value::equals`]. `None` for missing values.
    pub fn index_key(&self) -> Option<String> {
        match self {
            Value::Text(s) => Some(format!("s:{}", s)),
            Value::Integer(i) => Some(format!("n:{}", i)),
            Value::Float(f) => Some(format!("n:{}", f)),
            Value::Missing => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{}", v),
            Value::Missing => write!(f, "nan"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
