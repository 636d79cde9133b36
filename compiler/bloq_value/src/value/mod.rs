//! Runtime values for the bloq expression engine.
//!
//! `Value` is a closed tagged union. Operator implementations match on it
//! exhaustively, so adding a variant surfaces every operator that has to
//! decide what to do with it.
//!
//! Two sentinels sit beside the JSON-like variants:
//! - `Delete`: the script asked for the target field to be removed
//! - `Absent`: an expression produced no value at all (missing field,
//!   unset metadata key)
//!
//! Together with `Null` they are "nil-like", which is what the coalescing
//! operator skips over.

mod de;
mod number;

use std::fmt;

use rustc_hash::FxHashMap;

pub use number::Number;

/// String-keyed, unordered object payload.
pub type Mapping = FxHashMap<String, Value>;

/// Runtime value produced by evaluating an operand.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// Unsigned 64-bit integer.
    UInt(u64),
    /// 64-bit floating point.
    Float(f64),
    String(String),
    Mapping(Mapping),
    Array(Vec<Value>),
    /// Sentinel: remove the target field.
    Delete,
    /// Sentinel: no value was produced.
    Absent,
}

/// Tag of a `Value` variant, used in type errors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    String,
    Mapping,
    Array,
    Delete,
    Absent,
}

impl ValueKind {
    /// User-facing description. All numeric widths read as `number`.
    pub const fn description(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int | ValueKind::UInt | ValueKind::Float => "number",
            ValueKind::String => "string",
            ValueKind::Mapping => "object",
            ValueKind::Array => "array",
            ValueKind::Delete => "delete",
            ValueKind::Absent => "nothing",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::UInt | ValueKind::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(items)
    }

    /// Create a mapping from key/value pairs.
    ///
    /// ```text
    /// let obj = Value::mapping([("foo", Value::string("bar"))]);
    /// ```
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// Inspection

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Array(_) => ValueKind::Array,
            Value::Delete => ValueKind::Delete,
            Value::Absent => ValueKind::Absent,
        }
    }

    /// Shorthand for `self.kind().description()`.
    pub fn type_name(&self) -> &'static str {
        self.kind().description()
    }

    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Widened numeric view of `Int`, `UInt` and `Float`; `None` otherwise.
    pub fn numeric_value(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::UInt(n) => Some(Number::UInt(*n)),
            Value::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    /// True for `Null`, `Delete` and `Absent`.
    pub fn is_nil_like(&self) -> bool {
        matches!(self, Value::Null | Value::Delete | Value::Absent)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key on a mapping. Any other variant has no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(m) => m.get(key),
            _ => None,
        }
    }

    /// Language-level equality.
    ///
    /// Numbers compare by numeric value across widths, collections compare
    /// element-wise, and any other cross-kind pair is unequal. Never fails.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null)
            | (Value::Delete, Value::Delete)
            | (Value::Absent, Value::Absent) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Mapping(a), Value::Mapping(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .all(|(k, v)| b.get(k).is_some_and(|other| v.equals(other)))
            }
            _ => match (self.numeric_value(), other.numeric_value()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(n) => Value::Int(n),
            Number::UInt(n) => Value::UInt(n),
            Number::Float(n) => Value::Float(n),
        }
    }
}

// Display

impl Value {
    /// Render nested values: strings are quoted so collections stay readable.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            other => fmt::Display::fmt(other, f),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                // Sorted so the rendering is stable across hash seeds.
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                f.write_str("{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{key:?}:")?;
                    if let Some(value) = entries.get(key) {
                        value.fmt_nested(f)?;
                    }
                }
                f.write_str("}")
            }
            Value::Delete => f.write_str("deleted()"),
            Value::Absent => f.write_str("nothing()"),
        }
    }
}
