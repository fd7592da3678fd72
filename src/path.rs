//! Path grammar: a backslash-delimited address into an object graph.
//!
//! A path like `Users\@ann\Status` reads "property `Users`, then the element
//! keyed by the text `ann`, then property `Status`". Classification of each
//! segment is purely local — the leading characters decide the segment kind
//! and nothing else; there is no lookahead and no backtracking.
//!
//! Parsing never fails. Enum indexer segments (`@@Type.Literal`) carry their
//! enum path unresolved; the resolver looks them up against an
//! [`EnumRegistry`](crate::enums::EnumRegistry) only when the walk actually
//! reaches them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One delimited unit of a path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// A plain property name, read through the property accessor.
    Property(String),
    /// `@key`: a literal text key for the object's indexer.
    Index(String),
    /// `@@Type.Literal`: an enum path, resolved to an enum value before being
    /// used as the indexer key.
    EnumIndex(String),
}

impl Segment {
    /// Classifies one raw segment by its leading characters.
    pub fn classify(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix("@@") {
            Segment::EnumIndex(rest.to_string())
        } else if let Some(rest) = raw.strip_prefix('@') {
            Segment::Index(rest.to_string())
        } else {
            Segment::Property(raw.to_string())
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Property(name) => write!(f, "{}", name),
            Segment::Index(key) => write!(f, "@{}", key),
            Segment::EnumIndex(path) => write!(f, "@@{}", path),
        }
    }
}

/// A canonical, type-safe representation of a parsed path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectPath(pub Vec<Segment>);

impl ObjectPath {
    /// Splits `raw` on `\` and classifies every piece.
    ///
    /// The result is always non-empty: empty raw segments (from leading,
    /// trailing, or doubled delimiters) are legal and become empty property
    /// names, which simply fail to match anything at resolution time.
    pub fn parse(raw: &str) -> Self {
        ObjectPath(raw.split('\\').map(Segment::classify).collect())
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                write!(f, "\\")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}
