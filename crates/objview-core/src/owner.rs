//! Owner identity decoding.
//!
//! The owner field of an object record has been serialized in several ways over
//! the ledger's history:
//! - `"AddressOwner(k#<addr>)"`
//! - `"SingleOwner(k#<addr>)"`
//! - `{"AddressOwner": [20 byte values]}`
//!
//! All of them go through [`OwnerEncoding::detect`] followed by
//! [`OwnerEncoding::decode`]. A new encoding is a new variant, not a new call site.
//!
//! Decoding is total. A value that matches nothing, or matches but cannot be
//! decoded, yields `None`. Only a malformed byte payload is reported as a
//! diagnostic; an unrecognized encoding is traced at debug level and otherwise
//! left silent.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::config::{OwnerBytesEncoding, OwnerConfig};
use crate::diagnostics::Diagnostics;
use crate::model::{kind_name, CanonicalOwner};

const ADDRESS_OWNER_PREFIX: &str = "AddressOwner(k#";
const ADDRESS_OWNER_SUFFIX: &str = ")";
const TAGGED_ADDRESS_OWNER_KEY: &str = "AddressOwner";

fn single_owner_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"SingleOwner\(k#(.*)\)")
            .unwrap_or_else(|e| panic!("invalid single owner pattern: {e}"))
    })
}

/// The encoding a raw owner value uses. Exactly one variant applies per input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OwnerEncoding<'a> {
    /// `AddressOwner(k#...)`. Holds the full string.
    LegacyAddressOwnerString(&'a str),
    /// `SingleOwner(k#...)`. Holds the full string.
    LegacySingleOwnerString(&'a str),
    /// Object with an `AddressOwner` key. Holds the payload under that key.
    TaggedAddressOwner(&'a Value),
    Unrecognized,
}

impl<'a> OwnerEncoding<'a> {
    /// Classify a raw owner value. Order matters: the `AddressOwner(k#` prefix is
    /// tested before the looser `SingleOwner` capture.
    pub fn detect(raw: &'a Value) -> Self {
        match raw {
            Value::String(s) if s.starts_with(ADDRESS_OWNER_PREFIX) => {
                Self::LegacyAddressOwnerString(s.as_str())
            }
            Value::String(s) if single_owner_re().is_match(s) => {
                Self::LegacySingleOwnerString(s.as_str())
            }
            Value::Object(o) => match o.get(TAGGED_ADDRESS_OWNER_KEY) {
                Some(payload) => Self::TaggedAddressOwner(payload),
                None => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegacyAddressOwnerString(_) => "legacy_address_owner_string",
            Self::LegacySingleOwnerString(_) => "legacy_single_owner_string",
            Self::TaggedAddressOwner(_) => "tagged_address_owner",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Decode into a canonical owner.
    pub fn decode(self, cfg: &OwnerConfig, diags: &mut Diagnostics) -> Option<CanonicalOwner> {
        match self {
            Self::LegacyAddressOwnerString(s) => s
                .strip_prefix(ADDRESS_OWNER_PREFIX)
                .and_then(|rest| rest.strip_suffix(ADDRESS_OWNER_SUFFIX))
                .and_then(CanonicalOwner::new),
            Self::LegacySingleOwnerString(s) => single_owner_re()
                .captures(s)
                .and_then(|c| c.get(1))
                .and_then(|m| CanonicalOwner::new(m.as_str())),
            Self::TaggedAddressOwner(payload) => decode_address_bytes(payload, cfg, diags),
            Self::Unrecognized => None,
        }
    }
}

/// Detect and decode a raw owner value.
pub fn decode_owner(raw: &Value, cfg: &OwnerConfig, diags: &mut Diagnostics) -> Option<CanonicalOwner> {
    let encoding = OwnerEncoding::detect(raw);
    let owner = encoding.decode(cfg, diags);
    if owner.is_none() {
        tracing::debug!(encoding = encoding.as_str(), "owner not decodable");
    }
    owner
}

fn decode_address_bytes(
    payload: &Value,
    cfg: &OwnerConfig,
    diags: &mut Diagnostics,
) -> Option<CanonicalOwner> {
    let Some(items) = payload.as_array() else {
        diags
            .push_warning(
                "owner.invalid_payload",
                format!("address owner payload must be a byte array, got {}", kind_name(payload)),
            )
            .with_data("kind", kind_name(payload));
        return None;
    };

    if items.len() != cfg.address_len {
        diags
            .push_warning(
                "owner.invalid_payload",
                format!("address owner byte length must be {}", cfg.address_len),
            )
            .with_data("expected", cfg.address_len.to_string())
            .with_data("actual", items.len().to_string());
        return None;
    }

    let bytes: Option<Vec<u8>> = items
        .iter()
        .map(|b| b.as_u64().and_then(|n| u8::try_from(n).ok()))
        .collect();
    let Some(bytes) = bytes else {
        diags.push_warning(
            "owner.invalid_payload",
            "address owner payload must contain only values in 0..=255",
        );
        return None;
    };

    let rendered = match cfg.bytes_encoding {
        OwnerBytesEncoding::Ascii => bytes.iter().map(|&b| char::from(b)).collect::<String>(),
        OwnerBytesEncoding::Hex => format!("0x{}", hex::encode(&bytes)),
    };
    CanonicalOwner::new(rendered)
}
