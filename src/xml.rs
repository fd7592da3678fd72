//! Shallow XML projection of reflective objects.
//!
//! `to_xml` emits one element per object: the tag is the lower-cased type
//! name, with one lower-cased child element per declared property holding the
//! property value's text. This is a deliberate one-level projection, not a
//! serializer — object-valued properties render as their type name, and
//! nothing recurses.
//!
//! Empty-value policy: a Nil (or absent) property renders as empty element
//! text, e.g. `<email></email>`.

use std::fmt::Write;

use crate::reflect::{accessor, IndexLookup, Key, Reflective};
use crate::value::Value;

/// Projects a single object into an XML element.
///
/// Child elements follow the declared property order, which is stable for a
/// given type across calls.
pub fn to_xml(obj: &dyn Reflective) -> String {
    let tag = obj.type_name().to_lowercase();
    let mut xml = String::new();
    let _ = write!(xml, "<{}>", tag);
    for spec in obj.properties() {
        let text = match accessor::get(obj, &spec.name) {
            Some(value) => value_text(&value),
            None => String::new(),
        };
        let child = spec.name.to_lowercase();
        let _ = write!(xml, "<{}>{}</{}>", child, xml_escape(&text), child);
    }
    let _ = write!(xml, "</{}>", tag);
    xml
}

/// Projects a countable, ordinally indexed collection into a `<list>`
/// wrapper around the projection of each element.
///
/// The collection is expected to declare a `Count` property and an ordinal
/// indexer. A missing or non-integer `Count` degrades to an empty list body;
/// an index the collection cannot serve, or a non-object element, simply
/// contributes nothing for that index.
pub fn to_xml_list(obj: &dyn Reflective) -> String {
    let count = accessor::get(obj, "Count")
        .and_then(|v| v.as_int())
        .unwrap_or(0);

    let mut xml = String::from("<list>");
    for i in 0..count {
        if let IndexLookup::Found(Value::Object(item)) = obj.index(&Key::Ordinal(i)) {
            xml.push_str(&to_xml(&*item.borrow()));
        }
    }
    xml.push_str("</list>");
    xml
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Nil => String::new(),
        other => other.to_string(),
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
