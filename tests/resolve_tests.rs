//! Path resolution over a mixed object graph: plain properties, text and
//! enum indexers, short-circuiting, and path-addressed clearing.

mod common;

use common::{color_registry, Palette, Person};
use objpath::enums::EnumRegistry;
use objpath::reflect::{accessor, object, Record, RecordList};
use objpath::resolve::{resolve, resolve_and_clear, resolve_kind, ClearOutcome};
use objpath::value::{Value, ValueKind};
use objpath::{EnumResolveError, ObjectRef};

/// Root
///   User    -> Person { Name: "Ann", Age: 5 }
///   Users   -> Record keyed by name (text indexer), field "ann" -> the Person
///   Palette -> Palette { Red -> "#f00" }
fn graph() -> ObjectRef {
    let ann = object(Person::new("Ann", 5));
    let users = Record::new("Users").field_with(
        "ann",
        ValueKind::Object,
        Value::Object(ann.clone()),
    );
    let root = Record::new("Root")
        .field_with("User", ValueKind::Object, Value::Object(ann))
        .field_with("Users", ValueKind::Object, Value::Object(object(users)))
        .field_with(
            "Palette",
            ValueKind::Object,
            Value::Object(object(Palette::new(&[("Red", "#f00")]))),
        );
    object(root)
}

#[test]
fn two_segment_path_equals_nested_gets() {
    let root = graph();
    let enums = EnumRegistry::new();

    let via_path = resolve(&root, "User\\Name", &enums).unwrap();

    let user = accessor::get(&*root.borrow(), "User").unwrap();
    let Value::Object(user) = user else {
        panic!("expected object");
    };
    let via_gets = accessor::get(&*user.borrow(), "Name");

    assert_eq!(via_path, via_gets);
    assert_eq!(via_path, Some(Value::Text("Ann".into())));
}

#[test]
fn text_indexer_segment_fetches_an_element() {
    let root = graph();
    let enums = EnumRegistry::new();
    assert_eq!(
        resolve(&root, "Users\\@ann\\Age", &enums).unwrap(),
        Some(Value::Int(5))
    );
}

#[test]
fn missing_indexer_key_resolves_absent() {
    let root = graph();
    let enums = EnumRegistry::new();
    assert_eq!(resolve(&root, "Users\\@bob", &enums).unwrap(), None);
}

#[test]
fn unsupported_indexer_leaves_the_cursor_unchanged() {
    let root = graph();
    let enums = EnumRegistry::new();
    // Person declares no indexer at all, so `@whatever` is a no-op and the
    // walk continues from the Person itself.
    assert_eq!(
        resolve(&root, "User\\@whatever\\Name", &enums).unwrap(),
        Some(Value::Text("Ann".into()))
    );
}

#[test]
fn indexer_on_a_leaf_value_is_also_a_no_op() {
    let root = graph();
    let enums = EnumRegistry::new();
    assert_eq!(
        resolve(&root, "User\\Name\\@x", &enums).unwrap(),
        Some(Value::Text("Ann".into()))
    );
}

#[test]
fn property_segment_on_a_leaf_resolves_absent() {
    let root = graph();
    let enums = EnumRegistry::new();
    assert_eq!(resolve(&root, "User\\Name\\Length", &enums).unwrap(), None);
}

#[test]
fn enum_indexer_resolves_case_insensitively() {
    let root = graph();
    let enums = color_registry();
    for path in ["Palette\\@@Color.Red", "Palette\\@@Color.red"] {
        assert_eq!(
            resolve(&root, path, &enums).unwrap(),
            Some(Value::Text("#f00".into())),
            "path {path}"
        );
    }
}

#[test]
fn enum_key_without_an_element_resolves_absent() {
    let root = graph();
    let enums = color_registry();
    // Blue is a registered literal, the palette just has no swatch for it.
    assert_eq!(resolve(&root, "Palette\\@@Color.Blue", &enums).unwrap(), None);
}

#[test]
fn undefined_enum_literal_is_a_hard_error() {
    let root = graph();
    let enums = color_registry();
    assert_eq!(
        resolve(&root, "Palette\\@@Color.Purple", &enums),
        Err(EnumResolveError::UnknownLiteral {
            type_name: "Color".into(),
            literal: "Purple".into()
        })
    );
}

#[test]
fn unknown_enum_type_is_a_hard_error() {
    let root = graph();
    let enums = color_registry();
    assert_eq!(
        resolve(&root, "Palette\\@@Shape.Red", &enums),
        Err(EnumResolveError::UnknownType {
            type_name: "Shape".into()
        })
    );
}

#[test]
fn absent_cursor_short_circuits_later_segments() {
    let root = graph();
    let enums = color_registry();
    // The enum segment would be a hard error if evaluated; the absent cursor
    // from `Ghost` must stop the walk before it is reached.
    assert_eq!(
        resolve(&root, "Ghost\\@@Color.Purple", &enums),
        Ok(None)
    );
}

#[test]
fn resolution_is_pure_and_repeatable() {
    let root = graph();
    let enums = color_registry();
    let first = resolve(&root, "Users\\@ann\\Age", &enums).unwrap();
    let second = resolve(&root, "Users\\@ann\\Age", &enums).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        resolve(&root, "User\\Name", &enums).unwrap(),
        Some(Value::Text("Ann".into()))
    );
}

#[test]
fn empty_segments_resolve_absent() {
    let root = graph();
    let enums = EnumRegistry::new();
    assert_eq!(resolve(&root, "", &enums).unwrap(), None);
    assert_eq!(resolve(&root, "\\User", &enums).unwrap(), None);
}

#[test]
fn resolve_kind_reports_the_resolved_value_kind() {
    let root = graph();
    let enums = EnumRegistry::new();
    assert_eq!(
        resolve_kind(&root, "User\\Age", &enums).unwrap(),
        ValueKind::Int
    );
    assert_eq!(
        resolve_kind(&root, "User", &enums).unwrap(),
        ValueKind::Object
    );
    // Absent resolution defaults to the text kind.
    assert_eq!(resolve_kind(&root, "Ghost", &enums).unwrap(), ValueKind::Text);
}

#[test]
fn clear_blanks_a_nested_field() {
    let enums = EnumRegistry::new();
    let session = Record::new("Session").field_with("Token", ValueKind::Text, "abc".into());
    let root = object(Record::new("Root").field_with(
        "Session",
        ValueKind::Object,
        Value::Object(object(session)),
    ));

    let outcome = resolve_and_clear(&root, "Session\\Token", &enums).unwrap();
    assert_eq!(outcome, ClearOutcome::Cleared);
    assert_eq!(
        resolve(&root, "Session\\Token", &enums).unwrap(),
        Some(Value::Nil)
    );
}

#[test]
fn clear_with_a_single_segment_targets_the_root() {
    let enums = EnumRegistry::new();
    let root = object(Record::new("Root").field_with("Flag", ValueKind::Bool, true.into()));
    assert_eq!(
        resolve_and_clear(&root, "Flag", &enums).unwrap(),
        ClearOutcome::Cleared
    );
    assert_eq!(resolve(&root, "Flag", &enums).unwrap(), Some(Value::Nil));
}

#[test]
fn clear_on_an_absent_prefix_reports_target_absent() {
    let enums = EnumRegistry::new();
    let root = graph();
    assert_eq!(
        resolve_and_clear(&root, "Ghost\\Token", &enums).unwrap(),
        ClearOutcome::TargetAbsent
    );
}

#[test]
fn clear_on_an_undeclared_final_name_is_a_no_op() {
    let enums = EnumRegistry::new();
    let root = graph();
    assert_eq!(
        resolve_and_clear(&root, "User\\Shoe", &enums).unwrap(),
        ClearOutcome::PropertyAbsent
    );
}

#[test]
fn clear_uses_the_final_segment_as_a_raw_name() {
    let enums = EnumRegistry::new();
    let root = graph();
    // `@ann` at the end is the literal property name "@ann", which the Users
    // record does not declare.
    assert_eq!(
        resolve_and_clear(&root, "Users\\@ann", &enums).unwrap(),
        ClearOutcome::PropertyAbsent
    );
}

#[test]
fn clear_respects_slots_that_reject_nil() {
    let enums = EnumRegistry::new();
    let root = graph();

    // Email is clearable on Person.
    let _ = accessor::set(
        &mut *resolve(&root, "User", &enums)
            .unwrap()
            .unwrap()
            .as_object()
            .unwrap()
            .borrow_mut(),
        "Email",
        Value::Text("ann@example.org".into()),
    );
    assert_eq!(
        resolve_and_clear(&root, "User\\Email", &enums).unwrap(),
        ClearOutcome::Cleared
    );
    assert_eq!(
        resolve(&root, "User\\Email", &enums).unwrap(),
        Some(Value::Nil)
    );

    // Name is a plain String slot with no empty representation.
    assert_eq!(
        resolve_and_clear(&root, "User\\Name", &enums).unwrap(),
        ClearOutcome::PropertyAbsent
    );
    assert_eq!(
        resolve(&root, "User\\Name", &enums).unwrap(),
        Some(Value::Text("Ann".into()))
    );
}

#[test]
fn record_lists_resolve_by_ordinal_through_the_reflect_api() {
    let enums = EnumRegistry::new();
    let mut list = RecordList::new();
    list.push(object(Person::new("Ann", 5)));
    list.push(object(Person::new("Bea", 7)));
    let root = object(
        Record::new("Root").field_with("People", ValueKind::Object, Value::Object(object(list))),
    );

    assert_eq!(
        resolve(&root, "People\\Count", &enums).unwrap(),
        Some(Value::Int(2))
    );
}
