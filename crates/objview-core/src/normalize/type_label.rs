//! Type string normalization.
//!
//! Fully-qualified type strings carry the framework package address as a module
//! path prefix (`0x2::coin::Coin<...>`). For compact display the prefix is removed.
//!
//! Rules:
//! - a single occurrence is removed wherever it appears
//! - when several occurrences exist (generic arguments, or a removal that splices
//!   a new one together) removal repeats until none remain, so the result is a
//!   fixed point: normalizing twice equals normalizing once
//! - strings without the prefix are returned unchanged

use std::sync::OnceLock;

use regex::Regex;

use crate::defaults::STD_LIB_PREFIX;

/// Strip every occurrence of `prefix` from `type_string`.
pub fn normalize_type(type_string: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return type_string.to_string();
    }

    let mut out = type_string.to_string();
    while let Some(idx) = out.find(prefix) {
        out.replace_range(idx..idx + prefix.len(), "");
    }
    out
}

/// [`normalize_type`] with the default framework prefix.
pub fn normalize_type_default(type_string: &str) -> String {
    normalize_type(type_string, STD_LIB_PREFIX)
}

fn type_string_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^0x[0-9a-fA-F]+::[A-Za-z_][A-Za-z0-9_]*::[A-Za-z_][A-Za-z0-9_]*")
            .unwrap_or_else(|e| panic!("invalid type string pattern: {e}"))
    })
}

/// Whether `s` looks like a fully-qualified type string (`0x<addr>::<module>::<Name>`).
pub fn is_type_string(s: &str) -> bool {
    type_string_re().is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix() {
        assert_eq!(normalize_type_default("0x2::coin::Coin<SUI>"), "coin::Coin<SUI>");
    }

    #[test]
    fn no_prefix_is_unchanged() {
        assert_eq!(normalize_type_default("0x3::validator::Validator"), "0x3::validator::Validator");
        assert_eq!(normalize_type_default(""), "");
    }

    #[test]
    fn strips_nested_occurrences() {
        assert_eq!(
            normalize_type_default("0x2::coin::Coin<0x2::sui::SUI>"),
            "coin::Coin<sui::SUI>"
        );
    }

    #[test]
    fn spliced_prefix_reaches_fixed_point() {
        let once = normalize_type_default("0x0x2::2::x");
        assert_eq!(once, "x");
        assert_eq!(normalize_type_default(&once), once);
    }

    #[test]
    fn custom_prefix_and_empty_prefix() {
        assert_eq!(normalize_type("std::string::String", "std::"), "string::String");
        assert_eq!(normalize_type("0x2::a::B", ""), "0x2::a::B");
    }

    #[test]
    fn detects_type_strings() {
        assert!(is_type_string("0x2::coin::Coin<0x2::sui::SUI>"));
        assert!(is_type_string("0xABCDEF::my_mod::Thing"));
        assert!(!is_type_string("coin::Coin"));
        assert!(!is_type_string("hello 0x2::coin::Coin"));
        assert!(!is_type_string("0x2::coin"));
    }
}
