use std::fmt;

use rust_decimal::Decimal;

/// A scalar that can be written directly into a form-encoded request.
///
/// The remote API only accepts flat string, number and boolean values;
/// anything nested has to be flattened into bracket-indexed keys before
/// it reaches the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw string, written verbatim.
    Str(String),
    /// Signed integer, also used for Unix timestamps and counts.
    Int(i64),
    /// Boolean, written as `true` or `false`.
    Bool(bool),
    /// Exact decimal, used for percentage amounts.
    Decimal(Decimal),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Decimal(d) => write!(f, "{}", d),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}
