use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use objview_core::config::{validate_config, EngineConfig};

/// Read raw input bytes from a file path, or from stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read(input).with_context(|| format!("failed to read {input}"))
}

pub fn read_json_file<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let raw = fs::read_to_string(path.as_ref())?;
    let v: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid json: {e}"))?;
    Ok(v)
}

/// Load and validate an engine config file. Missing fields take their defaults.
pub fn read_config<P: AsRef<Path>>(path: P) -> Result<EngineConfig> {
    let path = path.as_ref();
    let v = read_json_file(path).with_context(|| format!("failed to load config {}", path.display()))?;
    let cfg: EngineConfig =
        serde_json::from_value(v).map_err(|e| anyhow!("invalid config: {e}"))?;
    validate_config(&cfg)?;
    Ok(cfg)
}
