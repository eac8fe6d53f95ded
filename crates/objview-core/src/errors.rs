//! Error types for objview-core.
//!
//! The engine itself never fails: decoding and classification problems degrade to
//! absent values and diagnostics. Errors only come from the edges of the crate:
//! parsing raw bytes into a record, reading a query response envelope, and
//! validating configuration.

use thiserror::Error;

/// Result alias used across the crate.
pub type ObjviewResult<T> = Result<T, ObjviewError>;

#[derive(Debug, Error)]
pub enum ObjviewError {
    /// Caller-provided input has the wrong shape or exceeds a limit.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Bytes could not be decoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Configuration violates an invariant.
    #[error("invalid config: {0}")]
    Config(String),
}

impl ObjviewError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let e = ObjviewError::invalid_argument("record must be an object");
        assert_eq!(e.to_string(), "invalid argument: record must be an object");
        assert!(ObjviewError::config("x").to_string().starts_with("invalid config"));
    }
}
