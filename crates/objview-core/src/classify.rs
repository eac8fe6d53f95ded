//! Field classification.
//!
//! Object records carry no schema, so reference fields (links to other objects)
//! are recognized from the key and the value's structure. Classification is an
//! ordered decision list, written out as two rule tables:
//!
//! 1. [`REFERENCE_KEY_RULES`]: does the field look like a reference at all?
//! 2. [`REFERENCE_SHAPE_RULES`]: if so, which reference shape does the value have?
//!
//! The first matching rule wins. Fields that are not references become scalar
//! properties when their value is a number or a string, and are suppressed
//! otherwise. Every field yields exactly one [`ClassifiedField`].

use serde_json::Value;

use crate::config::ReferencePolicy;
use crate::model::{ClassifiedField, ObjectReference, RawRecord, ScalarProperty, ScalarValue};

/// Key used for the embedded media panel; never a generic property.
pub const DISPLAY_KEY: &str = "display";

/// Keys consumed elsewhere (title, media panel) and never classified.
pub fn is_always_suppressed(key: &str) -> bool {
    key == DISPLAY_KEY || is_name_key(key)
}

/// Case-insensitive match on `name`.
pub fn is_name_key(key: &str) -> bool {
    key.to_ascii_lowercase().contains("name")
}

/// A named predicate deciding whether a field is reference-like.
#[derive(Clone, Copy)]
pub struct KeyRule {
    pub name: &'static str,
    pub matches: fn(&str, &Value) -> bool,
}

/// A named extractor for one reference shape.
#[derive(Clone, Copy)]
pub struct ShapeRule {
    pub name: &'static str,
    pub extract: fn(&Value) -> Option<Shape>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Single(String),
    Vector(Vec<String>),
}

pub const REFERENCE_KEY_RULES: &[KeyRule] = &[
    KeyRule { name: "owned_key", matches: owned_key },
    KeyRule { name: "id_key_with_bytes", matches: id_key_with_bytes },
    KeyRule { name: "vec_member", matches: has_vec_member },
    KeyRule { name: "objects_key", matches: objects_key },
];

pub const REFERENCE_SHAPE_RULES: &[ShapeRule] = &[
    ShapeRule { name: "single_bytes", extract: single_bytes },
    ShapeRule { name: "vec_of_bytes", extract: vec_of_bytes },
    ShapeRule { name: "sequence_of_bytes", extract: sequence_of_bytes },
];

fn owned_key(key: &str, _value: &Value) -> bool {
    key.to_ascii_lowercase().contains("owned")
}

fn id_key_with_bytes(key: &str, value: &Value) -> bool {
    key.contains("_id") && member(value, "bytes").is_some()
}

fn has_vec_member(_key: &str, value: &Value) -> bool {
    member(value, "vec").is_some()
}

fn objects_key(key: &str, _value: &Value) -> bool {
    key == "objects"
}

fn single_bytes(value: &Value) -> Option<Shape> {
    bytes_target(value).map(Shape::Single)
}

fn vec_of_bytes(value: &Value) -> Option<Shape> {
    let items = member(value, "vec")?.as_array()?;
    Some(Shape::Vector(items.iter().filter_map(bytes_target).collect()))
}

fn sequence_of_bytes(value: &Value) -> Option<Shape> {
    let items = value.as_array()?;
    bytes_target(items.first()?)?;
    Some(Shape::Vector(items.iter().filter_map(bytes_target).collect()))
}

/// Non-null member of an object value.
fn member<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key).filter(|v| !v.is_null())
}

/// Object id carried in a `{bytes: ...}` wrapper: a string verbatim, or a byte
/// array as lowercase hex.
pub fn bytes_target(value: &Value) -> Option<String> {
    match member(value, "bytes")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items
            .iter()
            .map(|b| b.as_u64().and_then(|n| u8::try_from(n).ok()))
            .collect::<Option<Vec<u8>>>()
            .map(hex::encode),
        _ => None,
    }
}

/// Classify one record field.
pub fn classify_field(key: &str, value: &Value, policy: ReferencePolicy) -> ClassifiedField {
    if is_always_suppressed(key) {
        return ClassifiedField::Suppressed { name: key.to_string() };
    }

    if let Some(rule) = REFERENCE_KEY_RULES.iter().find(|r| (r.matches)(key, value)) {
        let shape = REFERENCE_SHAPE_RULES
            .iter()
            .find_map(|s| (s.extract)(value));
        return match shape {
            Some(Shape::Single(target_id)) => ClassifiedField::Reference {
                reference: ObjectReference::SingleReference {
                    name: key.to_string(),
                    target_id,
                },
            },
            Some(Shape::Vector(target_ids)) => ClassifiedField::Reference {
                reference: ObjectReference::ReferenceVector {
                    name: key.to_string(),
                    target_ids,
                },
            },
            None => {
                tracing::debug!(field = key, rule = rule.name, "reference-like field has no reference shape");
                match policy {
                    ReferencePolicy::Drop => ClassifiedField::Suppressed { name: key.to_string() },
                    ReferencePolicy::Surface => ClassifiedField::Unresolved { name: key.to_string() },
                }
            }
        };
    }

    let value = match value {
        Value::Number(n) => ScalarValue::Number(n.clone()),
        Value::String(s) => ScalarValue::Text(s.clone()),
        _ => return ClassifiedField::Suppressed { name: key.to_string() },
    };
    ClassifiedField::Property {
        property: ScalarProperty {
            name: key.to_string(),
            value,
        },
    }
}

/// Classify every field of a record, in record order.
pub fn classify(record: &RawRecord, policy: ReferencePolicy) -> Vec<ClassifiedField> {
    record
        .iter()
        .map(|(k, v)| classify_field(k, v, policy))
        .collect()
}
