//! Dynamic value type flowing through every accessor operation.
//!
//! `Value` is what a property read produces and what a property write
//! consumes. "Absent" — a property or indexer that does not exist — is
//! represented by `Option::<Value>::None` throughout the crate and is kept
//! distinct from `Some(Value::Nil)`, a property that exists but holds nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::EnumValue;
use crate::errors::CoercionError;
use crate::reflect::ObjectRef;

/// The declared kind of a property, used to drive coercion on assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
    Enum,
    Object,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "Bool",
            ValueKind::Int => "Int",
            ValueKind::Float => "Float",
            ValueKind::Text => "Text",
            ValueKind::Enum => "Enum",
            ValueKind::Object => "Object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a value held by, or assigned to, an object property.
///
/// # Examples
///
/// ```rust
/// use objpath::value::Value;
/// let n = Value::Int(5);
/// assert_eq!(n.type_name(), "Int");
/// let nil = Value::default();
/// assert!(nil.is_nil());
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of content in an existing property; the null representation.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Enum(EnumValue),
    /// A nested object, traversable by further path segments.
    Object(ObjectRef),
}

impl Value {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "Nil",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Text(_) => "Text",
            Value::Enum(_) => "Enum",
            Value::Object(_) => "Object",
        }
    }

    /// The kind of this value. `Nil` reports [`ValueKind::Text`], the
    /// default kind of a resolved-but-empty slot.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Nil => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Enum(_) => ValueKind::Enum,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true if the value is Nil.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Returns the contained integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the contained text if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the contained object reference if this is an Object value.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Best-effort conversion to a declared property kind.
    ///
    /// Identity conversions always succeed, text parses into the numeric and
    /// boolean kinds, numbers convert between each other and render to text.
    /// `Nil` coerces to any kind unchanged — a cleared slot stays cleared.
    /// Everything else fails with a [`CoercionError`].
    pub fn coerce(self, kind: ValueKind) -> Result<Value, CoercionError> {
        let from = self.type_name();
        let failed = CoercionError { from, to: kind };
        match (self, kind) {
            (Value::Nil, _) => Ok(Value::Nil),

            (v @ Value::Bool(_), ValueKind::Bool) => Ok(v),
            (v @ Value::Int(_), ValueKind::Int) => Ok(v),
            (v @ Value::Float(_), ValueKind::Float) => Ok(v),
            (v @ Value::Text(_), ValueKind::Text) => Ok(v),
            (v @ Value::Enum(_), ValueKind::Enum) => Ok(v),
            (v @ Value::Object(_), ValueKind::Object) => Ok(v),

            (Value::Text(s), ValueKind::Int) => {
                s.trim().parse::<i64>().map(Value::Int).map_err(|_| failed)
            }
            (Value::Text(s), ValueKind::Float) => {
                s.trim().parse::<f64>().map(Value::Float).map_err(|_| failed)
            }
            (Value::Text(s), ValueKind::Bool) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(failed),
            },

            (Value::Int(n), ValueKind::Float) => Ok(Value::Float(n as f64)),
            (Value::Float(x), ValueKind::Int) if x.is_finite() => {
                Ok(Value::Int(x.round() as i64))
            }

            (v @ (Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Enum(_)), ValueKind::Text) => {
                Ok(Value::Text(v.to_string()))
            }

            (_, _) => Err(failed),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            // Object identity, not structural equality.
            (Value::Object(a), Value::Object(b)) => std::rc::Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => {
                if x.fract() == 0.0 && x.is_finite() {
                    write!(f, "{}", *x as i64)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Text(s) => write!(f, "{}", s),
            Value::Enum(e) => write!(f, "{}", e),
            Value::Object(obj) => write!(f, "{}", obj.borrow().type_name()),
        }
    }
}

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

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
