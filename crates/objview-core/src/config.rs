//! Configuration structures for objview-core.
//!
//! This module defines explicit, serializable configuration objects used by
//! hosts (CLI, renderers) to control type label normalization, owner decoding,
//! reference handling, and input limits.
//!
//! The core crate itself does not read environment variables or files. All
//! configuration must be provided explicitly by the caller. Every field has a
//! serde default so a partial JSON document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{ObjviewError, ObjviewResult};

/// Global configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub type_label: TypeLabelConfig,
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub references: ReferencePolicy,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Type string normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeLabelConfig {
    /// Module path prefix stripped from type strings.
    #[serde(default = "TypeLabelConfig::default_std_lib_prefix")]
    pub std_lib_prefix: String,

    /// Also normalize scalar property values that are type strings.
    #[serde(default = "TypeLabelConfig::default_normalize_inline")]
    pub normalize_inline: bool,
}

impl TypeLabelConfig {
    fn default_std_lib_prefix() -> String {
        crate::defaults::STD_LIB_PREFIX.to_string()
    }

    fn default_normalize_inline() -> bool {
        true
    }
}

impl Default for TypeLabelConfig {
    fn default() -> Self {
        Self {
            std_lib_prefix: Self::default_std_lib_prefix(),
            normalize_inline: Self::default_normalize_inline(),
        }
    }
}

/// Owner decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerConfig {
    /// Required length of byte-array owner payloads.
    #[serde(default = "OwnerConfig::default_address_len")]
    pub address_len: usize,

    #[serde(default)]
    pub bytes_encoding: OwnerBytesEncoding,
}

impl OwnerConfig {
    fn default_address_len() -> usize {
        crate::defaults::ADDRESS_LEN
    }
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            address_len: Self::default_address_len(),
            bytes_encoding: OwnerBytesEncoding::default(),
        }
    }
}

/// How a byte-array owner payload is rendered into a canonical owner string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerBytesEncoding {
    /// Each byte is a character code.
    #[default]
    Ascii,
    /// `0x` followed by lowercase hex.
    Hex,
}

impl OwnerBytesEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Hex => "hex",
        }
    }
}

/// What to do with a field whose key looks like a reference but whose value has
/// no recognizable reference shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferencePolicy {
    /// Suppress the field silently.
    #[default]
    Drop,
    /// Report it as unresolved, separately from properties and references.
    Surface,
}

impl ReferencePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drop => "drop",
            Self::Surface => "surface",
        }
    }
}

/// Input limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitsConfig {
    /// Maximum size of a JSON payload accepted by the parse helpers.
    #[serde(default = "LimitsConfig::default_max_record_bytes")]
    pub max_record_bytes: usize,
}

impl LimitsConfig {
    fn default_max_record_bytes() -> usize {
        crate::defaults::MAX_RECORD_BYTES
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_record_bytes: Self::default_max_record_bytes(),
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(cfg: &EngineConfig) -> ObjviewResult<()> {
    if cfg.type_label.std_lib_prefix.is_empty() {
        return Err(ObjviewError::config("stdLibPrefix must not be empty"));
    }

    if cfg.owner.address_len == 0 {
        return Err(ObjviewError::config(
            "owner addressLen must be greater than zero",
        ));
    }

    if cfg.limits.max_record_bytes == 0 {
        return Err(ObjviewError::config(
            "maxRecordBytes must be greater than zero",
        ));
    }

    Ok(())
}
