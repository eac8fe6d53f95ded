use anyhow::Result;
use objview_core::config::{OwnerBytesEncoding, OwnerConfig};
use objview_core::diagnostics::{Diagnostic, Diagnostics};
use objview_core::owner::{decode_owner, OwnerEncoding};
use serde::Serialize;
use serde_json::Value;

use crate::output;

#[derive(Debug, Serialize)]
pub struct OwnerOut {
    pub encoding: &'static str,
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

pub fn run(raw: &str, hex: bool) -> Result<()> {
    // Legacy owner strings are not valid JSON; take them verbatim.
    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let cfg = OwnerConfig {
        bytes_encoding: if hex { OwnerBytesEncoding::Hex } else { OwnerBytesEncoding::Ascii },
        ..OwnerConfig::default()
    };
    let mut diags = Diagnostics::new();
    let encoding = OwnerEncoding::detect(&value).as_str();
    let owner = decode_owner(&value, &cfg, &mut diags).map(|o| o.as_str().to_string());

    output::print(&OwnerOut {
        encoding,
        owner,
        diagnostics: diags.into_vec(),
    })
}
