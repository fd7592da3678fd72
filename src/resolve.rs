//! The path resolver: walks parsed segments against an object graph.
//!
//! Resolution is a pure cursor walk. Every kind of "not there" — undeclared
//! property, missing element, leaf reached too early — degrades to an absent
//! result; the walk short-circuits as soon as the cursor is absent and never
//! evaluates later segments. The single hard failure is a malformed
//! `@@Type.Literal` segment, which is a caller programming error rather than
//! missing data.

use crate::enums::EnumRegistry;
use crate::errors::EnumResolveError;
use crate::path::{ObjectPath, Segment};
use crate::reflect::{accessor, IndexLookup, Key, ObjectRef, SetOutcome};
use crate::value::{Value, ValueKind};

/// Outcome of [`resolve_and_clear`]. Like [`SetOutcome`], it is informational
/// and safe to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The addressed property was set to Nil.
    Cleared,
    /// The path prefix resolved, but the final object declares no such
    /// property.
    PropertyAbsent,
    /// The path prefix itself resolved to nothing (or to a non-object value).
    TargetAbsent,
}

/// Resolves `path` against `root`. The path string is re-parsed on every call.
///
/// `Ok(None)` means the path fell off the graph somewhere — that is a normal
/// result, not a failure.
pub fn resolve(
    root: &ObjectRef,
    path: &str,
    enums: &EnumRegistry,
) -> Result<Option<Value>, EnumResolveError> {
    resolve_segments(root, &ObjectPath::parse(path), enums)
}

/// Segment-level resolver for callers that already hold a parsed path.
pub fn resolve_segments(
    root: &ObjectRef,
    path: &ObjectPath,
    enums: &EnumRegistry,
) -> Result<Option<Value>, EnumResolveError> {
    let mut cursor = Some(Value::Object(root.clone()));
    for segment in path.segments() {
        let Some(current) = cursor.take() else {
            break;
        };
        cursor = step(current, segment, enums)?;
    }
    Ok(cursor)
}

/// Kind of the value `path` resolves to, defaulting to [`ValueKind::Text`]
/// when resolution comes up absent.
pub fn resolve_kind(
    root: &ObjectRef,
    path: &str,
    enums: &EnumRegistry,
) -> Result<ValueKind, EnumResolveError> {
    let resolved = resolve(root, path, enums)?;
    Ok(resolved.map(|v| v.kind()).unwrap_or(ValueKind::Text))
}

/// Resolves everything up to the last segment, then clears (sets to Nil) the
/// property the last segment names on the resulting object.
///
/// The final segment is used as a raw property name — prefixes are not
/// reinterpreted, so a trailing `@key` segment addresses a property literally
/// named `@key` (which ordinarily does not exist and clears nothing).
pub fn resolve_and_clear(
    root: &ObjectRef,
    path: &str,
    enums: &EnumRegistry,
) -> Result<ClearOutcome, EnumResolveError> {
    let parsed = ObjectPath::parse(path);
    let Some((last, prefix)) = parsed.segments().split_last() else {
        // parse() always yields at least one segment.
        return Ok(ClearOutcome::TargetAbsent);
    };

    let target = if prefix.is_empty() {
        Some(Value::Object(root.clone()))
    } else {
        resolve_segments(root, &ObjectPath(prefix.to_vec()), enums)?
    };

    let Some(Value::Object(obj)) = target else {
        return Ok(ClearOutcome::TargetAbsent);
    };

    let name = last.to_string();
    let outcome = accessor::set(&mut *obj.borrow_mut(), &name, Value::Nil);
    Ok(match outcome {
        SetOutcome::Assigned => ClearOutcome::Cleared,
        SetOutcome::NoSuchProperty | SetOutcome::CoercionFailed => ClearOutcome::PropertyAbsent,
    })
}

fn step(
    current: Value,
    segment: &Segment,
    enums: &EnumRegistry,
) -> Result<Option<Value>, EnumResolveError> {
    match segment {
        Segment::Property(name) => Ok(match &current {
            Value::Object(obj) => accessor::get(&*obj.borrow(), name),
            // A leaf has no named properties to follow.
            _ => None,
        }),
        Segment::Index(key) => Ok(lookup(current, &Key::Text(key.clone()))),
        Segment::EnumIndex(enum_path) => {
            let resolved = enums.resolve(enum_path)?;
            Ok(lookup(current, &Key::Enum(resolved)))
        }
    }
}

// Guarded optional lookup: a cursor whose type has no matching indexer is
// left unchanged, mirroring the property-path convention that an
// inapplicable indexer segment is a no-op rather than a failure.
fn lookup(current: Value, key: &Key) -> Option<Value> {
    let outcome = match &current {
        Value::Object(obj) => obj.borrow().index(key),
        _ => return Some(current),
    };
    match outcome {
        IndexLookup::Unsupported => Some(current),
        IndexLookup::Missing => None,
        IndexLookup::Found(value) => Some(value),
    }
}
