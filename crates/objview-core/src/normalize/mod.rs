//! Normalization helpers for display.
//!
//! Pure string utilities: no I/O, total, deterministic.

pub mod label;
pub mod type_label;

pub use label::display_label;
pub use type_label::{is_type_string, normalize_type, normalize_type_default};
