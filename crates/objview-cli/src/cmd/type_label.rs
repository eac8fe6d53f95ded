use anyhow::Result;
use objview_core::defaults::STD_LIB_PREFIX;
use objview_core::normalize::normalize_type;
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct TypeLabelOut {
    pub input: String,
    pub label: String,
}

pub fn run(type_string: &str, prefix: Option<&str>) -> Result<()> {
    let label = normalize_type(type_string, prefix.unwrap_or(STD_LIB_PREFIX));
    output::print(&TypeLabelOut {
        input: type_string.to_string(),
        label,
    })
}
