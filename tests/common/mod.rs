//! Shared fixtures for the integration tests: hand-written accessor tables
//! over a few concrete types, plus the enum registry the path tests index by.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use objpath::enums::EnumRegistry;
use objpath::reflect::{IndexLookup, Key, PropertySpec, Reflective};
use objpath::value::{Value, ValueKind};

/// A plain typed object with a hand-written accessor table. `email` is the
/// one clearable slot; `name` and `age` reject Nil.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub email: Option<String>,
}

impl Person {
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
            email: None,
        }
    }
}

impl Reflective for Person {
    fn type_name(&self) -> &str {
        "Person"
    }

    fn properties(&self) -> Vec<PropertySpec> {
        vec![
            PropertySpec::new("Name", ValueKind::Text),
            PropertySpec::new("Age", ValueKind::Int),
            PropertySpec::new("Email", ValueKind::Text),
        ]
    }

    fn property(&self, name: &str) -> Option<Value> {
        match name {
            "Name" => Some(Value::Text(self.name.clone())),
            "Age" => Some(Value::Int(self.age)),
            "Email" => Some(match &self.email {
                Some(email) => Value::Text(email.clone()),
                None => Value::Nil,
            }),
            _ => None,
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> bool {
        match (name, value) {
            ("Name", Value::Text(s)) => {
                self.name = s;
                true
            }
            ("Age", Value::Int(n)) => {
                self.age = n;
                true
            }
            ("Email", Value::Text(s)) => {
                self.email = Some(s);
                true
            }
            ("Email", Value::Nil) => {
                self.email = None;
                true
            }
            _ => false,
        }
    }
}

/// An object whose only capability is an enum-keyed indexer over `Color`
/// literals. Keys of any other kind — including enums of a different type —
/// report `Unsupported`.
#[derive(Debug)]
pub struct Palette {
    swatches: Vec<(String, String)>,
}

impl Palette {
    pub fn new(swatches: &[(&str, &str)]) -> Self {
        Self {
            swatches: swatches
                .iter()
                .map(|(l, hex)| (l.to_string(), hex.to_string()))
                .collect(),
        }
    }
}

impl Reflective for Palette {
    fn type_name(&self) -> &str {
        "Palette"
    }

    fn properties(&self) -> Vec<PropertySpec> {
        Vec::new()
    }

    fn property(&self, _name: &str) -> Option<Value> {
        None
    }

    fn set_property(&mut self, _name: &str, _value: Value) -> bool {
        false
    }

    fn index(&self, key: &Key) -> IndexLookup {
        match key {
            Key::Enum(e) if e.type_name == "Color" => {
                match self.swatches.iter().find(|(l, _)| l == &e.literal) {
                    Some((_, hex)) => IndexLookup::Found(Value::Text(hex.clone())),
                    None => IndexLookup::Missing,
                }
            }
            _ => IndexLookup::Unsupported,
        }
    }
}

pub fn color_registry() -> EnumRegistry {
    let mut registry = EnumRegistry::new();
    registry.register("Color", &["Red", "Green", "Blue"]);
    registry
}
