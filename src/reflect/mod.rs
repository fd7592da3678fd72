//! The reflection seam: a capability trait standing in for runtime property
//! metadata.
//!
//! The accessor has no compile-time knowledge of the shapes it traverses.
//! Anything that wants to be addressable by path implements [`Reflective`],
//! exposing its declared properties, raw get/set of property slots, and an
//! optional keyed element lookup. Coercion and the silent-failure assignment
//! policy live one layer up, in [`accessor`], so every implementor gets them
//! for free.
//!
//! Objects travel as [`ObjectRef`] (`Rc<RefCell<dyn Reflective>>`) so a value
//! resolved out of one object can later be mutated in place. The crate never
//! synchronizes access; consistency under concurrent mutation is the caller's
//! problem.

pub mod accessor;
pub mod record;

use std::{cell::RefCell, fmt, rc::Rc};

use crate::enums::EnumValue;
use crate::value::{Value, ValueKind};

pub use accessor::{exists, get, kind_of, set, SetOutcome};
pub use record::{Record, RecordList};

/// Shared handle to a traversable object.
pub type ObjectRef = Rc<RefCell<dyn Reflective>>;

/// Wraps a concrete [`Reflective`] value into an [`ObjectRef`].
pub fn object<T: Reflective + 'static>(value: T) -> ObjectRef {
    Rc::new(RefCell::new(value))
}

/// A declared property: its exact name and the kind assignments are coerced
/// to. Descriptors are re-derived on every access; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: String,
    pub kind: ValueKind,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A key for an object's single-argument element lookup. Matching is exact by
/// variant: a type that only understands `Text` keys reports `Unsupported`
/// for an `Ordinal` key, never a near miss.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// Literal text key, produced by `@key` path segments.
    Text(String),
    /// Integer element index, used by list projection.
    Ordinal(i64),
    /// Resolved enumeration constant, produced by `@@Type.Literal` segments.
    Enum(EnumValue),
}

/// Outcome of a keyed element lookup.
///
/// `Unsupported` ("this type has no indexer for that key kind") is
/// deliberately distinct from `Missing` ("the indexer exists but the key has
/// no element"): the resolver treats the former as a no-op and the latter as
/// an absent result.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexLookup {
    Unsupported,
    Missing,
    Found(Value),
}

/// The capability set the path engine needs from a traversable object.
///
/// `property` and `set_property` are raw slot access: no coercion, no
/// policy. Use the [`accessor`] functions for the public contract.
pub trait Reflective: fmt::Debug {
    /// Runtime type name; lower-cased by the XML projector for tag names.
    fn type_name(&self) -> &str;

    /// Declared properties in a stable, deterministic order.
    fn properties(&self) -> Vec<PropertySpec>;

    /// Current value of a declared property, or `None` when the name is not
    /// declared. A declared-but-empty slot is `Some(Value::Nil)`.
    fn property(&self, name: &str) -> Option<Value>;

    /// Writes a property slot directly. Returns false when the name is not
    /// declared or the slot rejects the write.
    fn set_property(&mut self, name: &str, value: Value) -> bool;

    /// Keyed element lookup. The default implementation declares no indexer
    /// at all.
    fn index(&self, _key: &Key) -> IndexLookup {
        IndexLookup::Unsupported
    }
}
