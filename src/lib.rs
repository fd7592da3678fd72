//! objpath: path-addressed reflection over dynamic object graphs.
//!
//! Given an arbitrary object graph and a backslash-delimited path through
//! properties (`Users`), indexers (`@ann`), and enum literals
//! (`@@StatusCode.EmailExists`), this crate resolves, reads, writes, and
//! shallowly serializes nested values with no compile-time knowledge of the
//! graph's shape.
//!
//! ```rust
//! use objpath::enums::EnumRegistry;
//! use objpath::reflect::{object, Record};
//! use objpath::resolve::resolve;
//! use objpath::value::{Value, ValueKind};
//!
//! let user = Record::new("User").field_with("Name", ValueKind::Text, "Ann".into());
//! let root = object(Record::new("Root").field_with(
//!     "User",
//!     ValueKind::Object,
//!     Value::Object(object(user)),
//! ));
//!
//! let enums = EnumRegistry::new();
//! let name = resolve(&root, "User\\Name", &enums).unwrap();
//! assert_eq!(name, Some(Value::Text("Ann".into())));
//! ```

pub use crate::errors::{CoercionError, EnumResolveError};
pub use crate::reflect::{object, ObjectRef, Reflective};
pub use crate::value::Value;

pub mod enums;
pub mod errors;
pub mod path;
pub mod reflect;
pub mod resolve;
pub mod value;
pub mod xml;
