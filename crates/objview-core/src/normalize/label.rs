//! Field name to section label.

/// Turn a record field name into a display label (`owned_tokens` -> `owned tokens`).
pub fn display_label(name: &str) -> String {
    name.replace('_', " ")
}
