//! The property accessor: the public read/write contract over any
//! [`Reflective`] object.
//!
//! Each call is its own ephemeral bound accessor — (object, name) in, result
//! out, nothing retained. Property names compare case-sensitively against the
//! declared property set.

use crate::value::{Value, ValueKind};

use super::Reflective;

/// Outcome of a best-effort assignment.
///
/// Callers doing bulk property-setting from loosely-typed sources are allowed
/// to ignore this; nothing here ever propagates as an error. The silent-drop
/// behavior of `NoSuchProperty` and `CoercionFailed` is a documented contract,
/// not an accident — do not upgrade either to a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The property was written (after coercion where needed).
    Assigned,
    /// The object declares no such property; nothing happened.
    NoSuchProperty,
    /// The value could not be coerced to the declared kind; the property
    /// keeps its prior value.
    CoercionFailed,
}

impl SetOutcome {
    pub fn assigned(&self) -> bool {
        matches!(self, SetOutcome::Assigned)
    }
}

/// True iff the object declares a property named exactly `name`.
pub fn exists(obj: &dyn Reflective, name: &str) -> bool {
    obj.properties().iter().any(|p| p.name == name)
}

/// Current value of `name`, or `None` when the object does not declare it.
pub fn get(obj: &dyn Reflective, name: &str) -> Option<Value> {
    obj.property(name)
}

/// Declared kind of `name`, used to drive coercion in [`set`].
pub fn kind_of(obj: &dyn Reflective, name: &str) -> Option<ValueKind> {
    obj.properties().into_iter().find(|p| p.name == name).map(|p| p.kind)
}

/// Best-effort assignment with coercion to the declared kind.
///
/// `Value::Nil` clears the slot directly, skipping coercion. A coercion
/// failure leaves the property observably unchanged.
pub fn set(obj: &mut dyn Reflective, name: &str, value: Value) -> SetOutcome {
    let Some(kind) = kind_of(obj, name) else {
        return SetOutcome::NoSuchProperty;
    };

    if value.is_nil() {
        return if obj.set_property(name, Value::Nil) {
            SetOutcome::Assigned
        } else {
            SetOutcome::NoSuchProperty
        };
    }

    match value.coerce(kind) {
        Ok(coerced) => {
            if obj.set_property(name, coerced) {
                SetOutcome::Assigned
            } else {
                SetOutcome::NoSuchProperty
            }
        }
        Err(_) => SetOutcome::CoercionFailed,
    }
}
