//! objview data models.
//!
//! This module defines the typed representations flowing through the engine:
//! - `RawRecord`: the loosely-typed object record handed in by the query layer
//! - `CanonicalOwner`: a decoded, non-empty owner identity
//! - `ClassifiedField` and its buckets (`ScalarProperty`, `ObjectReference`)
//! - `ViewModel`: the assembled, display-ready output
//!
//! Models are mostly "dumb" data. The decision logic lives in `owner`,
//! `normalize`, `classify` and `assemble`.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::diagnostics::Diagnostic;
use crate::errors::{ObjviewError, ObjviewResult};
use crate::normalize::label::display_label;
use crate::version::ObjectVersion;

/// An object record as returned by a ledger query.
///
/// Field order is the order of the source document and is preserved through
/// classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a JSON value, which must be an object.
    pub fn from_value(v: Value) -> ObjviewResult<Self> {
        match v {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ObjviewError::invalid_argument(format!(
                "object record must be a JSON object, got {}",
                kind_name(&other)
            ))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub(crate) fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A decoded owner identity. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalOwner(String);

impl CanonicalOwner {
    /// Returns `None` for an empty string.
    pub fn new(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of a scalar property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Number(Number),
    Text(String),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarProperty {
    pub name: String,
    pub value: ScalarValue,
}

impl ScalarProperty {
    /// Section label: underscores become spaces.
    pub fn label(&self) -> String {
        display_label(&self.name)
    }
}

/// A field identifying one or more other objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ObjectReference {
    #[serde(rename_all = "camelCase")]
    SingleReference { name: String, target_id: String },
    #[serde(rename_all = "camelCase")]
    ReferenceVector { name: String, target_ids: Vec<String> },
}

impl ObjectReference {
    pub fn name(&self) -> &str {
        match self {
            Self::SingleReference { name, .. } | Self::ReferenceVector { name, .. } => name,
        }
    }

    pub fn label(&self) -> String {
        display_label(self.name())
    }

    /// All referenced ids, in order.
    pub fn target_ids(&self) -> Vec<&str> {
        match self {
            Self::SingleReference { target_id, .. } => vec![target_id.as_str()],
            Self::ReferenceVector { target_ids, .. } => {
                target_ids.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Result of classifying one record field. Every field gets exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifiedField {
    Reference { reference: ObjectReference },
    Property { property: ScalarProperty },
    /// Reference-like key without a recognizable reference shape.
    Unresolved { name: String },
    Suppressed { name: String },
}

impl ClassifiedField {
    pub fn name(&self) -> &str {
        match self {
            Self::Reference { reference } => reference.name(),
            Self::Property { property } => &property.name,
            Self::Unresolved { name } | Self::Suppressed { name } => name,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed { .. })
    }
}

/// Extra description rows the explorer shows for some object kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionExtras {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_token_id: Option<String>,
}

impl DescriptionExtras {
    pub fn is_empty(&self) -> bool {
        self.contract_id.is_none() && self.eth_address.is_none() && self.eth_token_id.is_none()
    }
}

/// Display-ready representation of one ledger object.
///
/// Built fresh per call by [`crate::assemble::Assembler`]; absent or empty fields
/// mean the value could not be derived from the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub object_id: String,
    pub version: ObjectVersion,
    pub type_label: Option<String>,
    pub owner: Option<CanonicalOwner>,
    pub title: Option<String>,
    /// `None` when the record has no read-only flag.
    pub read_only: Option<bool>,
    pub properties: Vec<ScalarProperty>,
    pub references: Vec<ObjectReference>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
    #[serde(skip_serializing_if = "DescriptionExtras::is_empty")]
    pub description: DescriptionExtras,
    /// Embedded media payload, passed through untouched for the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}
