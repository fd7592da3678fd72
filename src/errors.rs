//! Error types for path resolution and value coercion.
//!
//! The crate absorbs almost every failure into an absent result or a named
//! outcome value; the one hard failure a caller can see is a malformed enum
//! segment. A bad `@@Type.Literal` path is a programming error in the caller,
//! not routine missing data, so it is reported distinctly instead of being
//! folded into "nothing there".

use miette::Diagnostic;
use thiserror::Error;

use crate::value::ValueKind;

/// Raised when an `@@Type.Literal` path segment cannot be resolved against the
/// enum registry. This is the only error that escapes resolution; every other
/// lookup failure degrades to an absent result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EnumResolveError {
    #[error("malformed enum path `{path}`")]
    #[diagnostic(
        code(objpath::enums::malformed_path),
        help("an enum indexer segment is written `@@TypeName.LiteralName`")
    )]
    MalformedPath { path: String },

    #[error("unknown enumeration type `{type_name}`")]
    #[diagnostic(
        code(objpath::enums::unknown_type),
        help("register the enumeration with `EnumRegistry::register` before resolving paths that index by it")
    )]
    UnknownType { type_name: String },

    #[error("`{literal}` is not a member of enumeration `{type_name}`")]
    #[diagnostic(code(objpath::enums::unknown_literal))]
    UnknownLiteral { type_name: String, literal: String },
}

/// A value could not be converted to a property's declared kind.
///
/// Never surfaced through the public accessor API: `set` consumes it and
/// reports [`SetOutcome::CoercionFailed`](crate::reflect::SetOutcome) instead,
/// so that bulk assignment from loosely-typed sources never aborts on one bad
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("cannot coerce a {from} value to {to}")]
#[diagnostic(code(objpath::value::coercion))]
pub struct CoercionError {
    pub from: &'static str,
    pub to: ValueKind,
}
