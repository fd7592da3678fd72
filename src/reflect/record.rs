//! Runtime-shaped objects: a dynamic record and an indexable record list.
//!
//! These are the "opaque objects with named properties" an external data
//! layer hands over — a row, a form post, a decoded JSON document. A
//! [`Record`] declares its shape at construction time and is addressable both
//! as properties and through a text-keyed indexer over its own fields; a
//! [`RecordList`] is the countable, ordinally-indexed collection the XML list
//! projection walks.

use im::HashMap;
use serde_json::Value as JsonValue;

use crate::value::{Value, ValueKind};

use super::{object, IndexLookup, Key, ObjectRef, PropertySpec, Reflective};

/// A dynamically shaped object: declared field order plus a persistent map of
/// current values. Insertion order is the declared property order.
#[derive(Debug, Clone)]
pub struct Record {
    type_name: String,
    order: Vec<PropertySpec>,
    values: HashMap<String, Value>,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            order: Vec::new(),
            values: HashMap::new(),
        }
    }

    /// Declares a field with an empty (Nil) value.
    pub fn field(self, name: impl Into<String>, kind: ValueKind) -> Self {
        self.field_with(name, kind, Value::Nil)
    }

    /// Declares a field holding `value`. Redeclaring a name overwrites the
    /// value but keeps the original position.
    pub fn field_with(
        mut self,
        name: impl Into<String>,
        kind: ValueKind,
        value: Value,
    ) -> Self {
        let name = name.into();
        if !self.order.iter().any(|p| p.name == name) {
            self.order.push(PropertySpec::new(name.clone(), kind));
        }
        self.values.insert(name, value);
        self
    }

    /// Builds a record from a JSON object, inferring field kinds from the
    /// JSON values. Nested objects become nested records; arrays become
    /// [`RecordList`]s of their object elements (non-object elements are
    /// dropped). Non-object `json` input yields an empty record.
    ///
    /// Field order follows `serde_json`'s map iteration, which is
    /// deterministic for a given document.
    pub fn from_json(type_name: &str, json: &JsonValue) -> Self {
        let mut record = Record::new(type_name);
        let JsonValue::Object(map) = json else {
            return record;
        };
        for (name, field) in map {
            record = match field {
                JsonValue::Null => record.field(name, ValueKind::Text),
                JsonValue::Bool(b) => record.field_with(name, ValueKind::Bool, Value::Bool(*b)),
                JsonValue::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        record.field_with(name, ValueKind::Int, Value::Int(i))
                    } else {
                        let x = n.as_f64().unwrap_or_default();
                        record.field_with(name, ValueKind::Float, Value::Float(x))
                    }
                }
                JsonValue::String(s) => {
                    record.field_with(name, ValueKind::Text, Value::Text(s.clone()))
                }
                JsonValue::Object(_) => {
                    let nested = Record::from_json(name, field);
                    record.field_with(name, ValueKind::Object, Value::Object(object(nested)))
                }
                JsonValue::Array(items) => {
                    let mut list = RecordList::new();
                    for item in items {
                        if item.is_object() {
                            list.push(object(Record::from_json(name, item)));
                        }
                    }
                    record.field_with(name, ValueKind::Object, Value::Object(object(list)))
                }
            };
        }
        record
    }
}

impl Reflective for Record {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn properties(&self) -> Vec<PropertySpec> {
        self.order.clone()
    }

    fn property(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: Value) -> bool {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            true
        } else {
            false
        }
    }

    // Dictionary-style access: the text indexer addresses the record's own
    // fields, so `@name` and plain `name` segments reach the same slot.
    fn index(&self, key: &Key) -> IndexLookup {
        match key {
            Key::Text(name) => match self.values.get(name) {
                Some(value) => IndexLookup::Found(value.clone()),
                None => IndexLookup::Missing,
            },
            _ => IndexLookup::Unsupported,
        }
    }
}

/// A countable, ordinally indexed collection of objects.
#[derive(Debug, Clone, Default)]
pub struct RecordList {
    items: Vec<ObjectRef>,
}

impl RecordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: ObjectRef) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<ObjectRef>> for RecordList {
    fn from(items: Vec<ObjectRef>) -> Self {
        Self { items }
    }
}

impl Reflective for RecordList {
    fn type_name(&self) -> &str {
        "records"
    }

    fn properties(&self) -> Vec<PropertySpec> {
        vec![PropertySpec::new("Count", ValueKind::Int)]
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "Count" => Some(Value::Int(self.items.len() as i64)),
            _ => None,
        }
    }

    // Count is derived, not writable.
    fn set_property(&mut self, _name: &str, _value: Value) -> bool {
        false
    }

    fn index(&self, key: &Key) -> IndexLookup {
        match key {
            Key::Ordinal(i) => {
                let found = usize::try_from(*i)
                    .ok()
                    .and_then(|idx| self.items.get(idx));
                match found {
                    Some(item) => IndexLookup::Found(Value::Object(item.clone())),
                    None => IndexLookup::Missing,
                }
            }
            _ => IndexLookup::Unsupported,
        }
    }
}
