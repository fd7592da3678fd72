//! Enumeration registry for `@@Type.Literal` path segments.
//!
//! Rust has no runtime lookup of enum types by name, so the enumerations a
//! path may index by are registered up front. The registry is plain data owned
//! by the caller and passed by reference into resolution; there is no global
//! state.

use std::fmt;

use im::HashMap;
use serde::{Deserialize, Serialize};

use crate::errors::EnumResolveError;

/// A resolved enumeration constant. Identity is the (type, literal) pair;
/// `literal` always carries the registered canonical casing, whatever casing
/// the path used.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumValue {
    pub type_name: String,
    pub literal: String,
}

impl EnumValue {
    pub fn new(type_name: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            literal: literal.into(),
        }
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// Maps enumeration type names to their ordered literal lists.
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    types: HashMap<String, Vec<String>>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an enumeration under `type_name`. Re-registering a name
    /// replaces its literal list.
    pub fn register(&mut self, type_name: impl Into<String>, literals: &[&str]) {
        self.types.insert(
            type_name.into(),
            literals.iter().map(|l| l.to_string()).collect(),
        );
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Resolves an enum path of the form `Type.Literal`.
    ///
    /// The path is split at the last `.` — the type name may itself be
    /// dotted (`Utils.StatusCode.EmailExists`). Type names match
    /// case-sensitively; literals match case-insensitively, and the returned
    /// value carries the registered casing.
    pub fn resolve(&self, enum_path: &str) -> Result<EnumValue, EnumResolveError> {
        let (type_name, literal) = match enum_path.rsplit_once('.') {
            Some((t, l)) if !t.is_empty() && !l.is_empty() => (t, l),
            _ => {
                return Err(EnumResolveError::MalformedPath {
                    path: enum_path.to_string(),
                })
            }
        };

        let literals = self.types.get(type_name).ok_or_else(|| {
            EnumResolveError::UnknownType {
                type_name: type_name.to_string(),
            }
        })?;

        literals
            .iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(literal))
            .map(|canonical| EnumValue::new(type_name, canonical.clone()))
            .ok_or_else(|| EnumResolveError::UnknownLiteral {
                type_name: type_name.to_string(),
                literal: literal.to_string(),
            })
    }
}
