//! Parsing helpers for engine inputs.
//!
//! The engine does no I/O. Helpers in this module operate on in-memory bytes or
//! already-decoded JSON and produce the engine's inputs:
//! - a bare object record (`RawRecord`)
//! - a query response envelope carrying the record plus its id and version
//!
//! Parsing is strict about the envelope and size limits, and says nothing about
//! the record's fields; those are the classifier's business.

use serde_json::{Map, Value};

use crate::errors::{ObjviewError, ObjviewResult};
use crate::model::{kind_name, RawRecord};
use crate::version::ObjectVersion;

/// Shape of a decoded JSON payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// `{details: {object: {...}, objectRef: {...}}}`
    Response,
    /// Any other JSON object, taken as the record itself.
    Record,
    Unknown,
}

/// A record together with the identity reported by the query layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectResponse {
    pub object_id: String,
    pub version: ObjectVersion,
    pub record: RawRecord,
}

/// Parse JSON bytes into `serde_json::Value` with a hard size limit.
pub fn parse_json_bytes(bytes: &[u8], max_bytes: usize) -> ObjviewResult<Value> {
    if bytes.len() > max_bytes {
        return Err(ObjviewError::invalid_argument(format!(
            "JSON payload too large ({} bytes > limit {})",
            bytes.len(),
            max_bytes
        )));
    }

    serde_json::from_slice(bytes)
        .map_err(|e| ObjviewError::serialization(format!("failed to parse JSON: {e}")))
}

/// Detect whether a payload is a response envelope or a bare record.
pub fn detect_payload(v: &Value) -> PayloadKind {
    let Some(obj) = v.as_object() else {
        return PayloadKind::Unknown;
    };

    let is_response = obj
        .get("details")
        .and_then(Value::as_object)
        .is_some_and(|d| d.contains_key("object"));
    if is_response {
        PayloadKind::Response
    } else {
        PayloadKind::Record
    }
}

/// Read a query response envelope.
pub fn parse_response(v: Value) -> ObjviewResult<ObjectResponse> {
    let Value::Object(mut root) = v else {
        return Err(ObjviewError::invalid_argument("expected JSON object"));
    };
    let Some(Value::Object(mut details)) = root.remove("details") else {
        return Err(ObjviewError::invalid_argument("missing details object"));
    };

    let object_ref = details
        .get("objectRef")
        .and_then(Value::as_object)
        .ok_or_else(|| ObjviewError::invalid_argument("missing details.objectRef"))?;
    let object_id = read_object_id(object_ref)?;
    let version = object_ref
        .get("version")
        .ok_or_else(|| ObjviewError::invalid_argument("missing details.objectRef.version"))
        .and_then(ObjectVersion::from_value)?;

    let object = details
        .remove("object")
        .ok_or_else(|| ObjviewError::invalid_argument("missing details.object"))?;
    let record = RawRecord::from_value(object)?;

    Ok(ObjectResponse {
        object_id,
        version,
        record,
    })
}

fn read_object_id(object_ref: &Map<String, Value>) -> ObjviewResult<String> {
    match object_ref.get("objectId") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(other) => Err(ObjviewError::invalid_argument(format!(
            "details.objectRef.objectId must be a non-empty string, got {}",
            kind_name(other)
        ))),
        None => Err(ObjviewError::invalid_argument("missing details.objectRef.objectId")),
    }
}

/// Parse bytes into a bare record.
pub fn parse_record_bytes(bytes: &[u8], max_bytes: usize) -> ObjviewResult<RawRecord> {
    let v = parse_json_bytes(bytes, max_bytes)?;
    RawRecord::from_value(v)
}

/// Parse bytes into a response envelope.
pub fn parse_response_bytes(bytes: &[u8], max_bytes: usize) -> ObjviewResult<ObjectResponse> {
    let v = parse_json_bytes(bytes, max_bytes)?;
    if detect_payload(&v) != PayloadKind::Response {
        return Err(ObjviewError::invalid_argument("input is not a query response"));
    }
    parse_response(v)
}
