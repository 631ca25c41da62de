//! Hashable keys
//!
//! [`Key`] is the subset of [`Value`] with stable equality and hashing.
//! Converting a `Value` into a `Key` is the comparability check that guards
//! every dynamic store operation:
//!
//! | Value | Key |
//! |-------|-----|
//! | `Null`, `Bool`, `Int`, `String`, `Bytes` | same variant |
//! | `Float(NaN)` | rejected |
//! | `Float(x)` | `Float(bits)`, with `-0.0` folded into `0.0` |
//! | `Array` of comparable values | `Tuple` |
//! | `Object` | rejected |
//!
//! Rejection yields [`Error::KeyNotComparable`] carrying the whole offending
//! value, not just the nested part that failed.

use crate::error::{Error, Result};
use crate::value::Value;
use std::fmt;

/// A map key with stable `Eq` and `Hash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Null key
    Null,
    /// Boolean key
    Bool(bool),
    /// Integer key
    Int(i64),
    /// Non-NaN float, stored as normalized bits
    Float(u64),
    /// String key
    String(String),
    /// Binary key
    Bytes(Vec<u8>),
    /// Ordered tuple of keys
    Tuple(Vec<Key>),
}

impl Key {
    /// Build a float key, or `None` for NaN.
    pub fn float(f: f64) -> Option<Self> {
        if f.is_nan() {
            return None;
        }
        // -0.0 == 0.0, so they must share a key
        let f = if f == 0.0 { 0.0 } else { f };
        Some(Key::Float(f.to_bits()))
    }

    /// Check whether `value` could be used as a key.
    pub fn is_comparable(value: &Value) -> bool {
        Self::convert(value).is_some()
    }

    fn convert(value: &Value) -> Option<Key> {
        match value {
            Value::Null => Some(Key::Null),
            Value::Bool(b) => Some(Key::Bool(*b)),
            Value::Int(i) => Some(Key::Int(*i)),
            Value::Float(f) => Key::float(*f),
            Value::String(s) => Some(Key::String(s.clone())),
            Value::Bytes(b) => Some(Key::Bytes(b.clone())),
            Value::Array(items) => items
                .iter()
                .map(Self::convert)
                .collect::<Option<Vec<_>>>()
                .map(Key::Tuple),
            Value::Object(_) => None,
        }
    }
}

impl TryFrom<&Value> for Key {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Key::convert(value).ok_or_else(|| Error::not_comparable(value))
    }
}

impl TryFrom<Value> for Key {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Key::try_from(&value)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Null => Value::Null,
            Key::Bool(b) => Value::Bool(b),
            Key::Int(i) => Value::Int(i),
            Key::Float(bits) => Value::Float(f64::from_bits(bits)),
            Key::String(s) => Value::String(s),
            Key::Bytes(b) => Value::Bytes(b),
            Key::Tuple(items) => Value::Array(items.into_iter().map(Value::from).collect()),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

/// Same rendering as the equivalent [`Value`].
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "null"),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Int(i) => write!(f, "{}", i),
            Key::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            Key::String(s) => write!(f, "{}", s),
            Key::Bytes(b) => write!(f, "{:?}", b),
            Key::Tuple(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
