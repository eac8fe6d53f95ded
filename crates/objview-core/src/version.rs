//! Object version markers.
//!
//! The query layer reports an object's version either as a JSON number or as a
//! string (sequence numbers that do not fit a JS number are often quoted). The
//! engine does not interpret it; it only normalizes it to text for display.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ObjviewError, ObjviewResult};

/// Version marker of a ledger object, carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectVersion(String);

impl ObjectVersion {
    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    /// Read a version from a JSON value (number or non-empty string).
    pub fn from_value(v: &Value) -> ObjviewResult<Self> {
        match v {
            Value::Number(n) => Ok(Self(n.to_string())),
            Value::String(s) if !s.trim().is_empty() => Ok(Self(s.trim().to_string())),
            other => Err(ObjviewError::invalid_argument(format!(
                "unsupported version marker: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ObjectVersion {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}

impl From<&str> for ObjectVersion {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for ObjectVersion {
    fn from(v: String) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_number_and_string() {
        assert_eq!(ObjectVersion::from_value(&json!(7)).unwrap().as_str(), "7");
        assert_eq!(ObjectVersion::from_value(&json!(" 12 ")).unwrap().as_str(), "12");
    }

    #[test]
    fn parse_rejects_other_kinds() {
        let e = ObjectVersion::from_value(&json!({"v": 1})).unwrap_err();
        assert!(format!("{e:?}").contains("unsupported version marker"));
        assert!(ObjectVersion::from_value(&json!("")).is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let s = serde_json::to_string(&ObjectVersion::from(3u64)).unwrap();
        assert_eq!(s, r#""3""#);
    }
}
