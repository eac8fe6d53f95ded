//! Structured diagnostics collected while assembling a view model.
//!
//! Nothing in the engine is fatal. When a step cannot derive a value it leaves the
//! corresponding field absent and, where the failure is worth surfacing, records a
//! diagnostic here. Diagnostics are returned to the caller inside the view model and
//! mirrored as `tracing` events.
//!
//! Codes are dot-delimited and stable:
//! - `owner.invalid_payload`
//! - `classify.unresolved_reference`
//! - `record.read_only_kind`

use std::collections::BTreeMap;

use serde::Serialize;

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

/// Ordered diagnostic collector for one assembly run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_info(&mut self, code: impl Into<String>, message: impl Into<String>) -> &mut Diagnostic {
        self.push(DiagnosticLevel::Info, code.into(), message.into())
    }

    pub fn push_warning(&mut self, code: impl Into<String>, message: impl Into<String>) -> &mut Diagnostic {
        self.push(DiagnosticLevel::Warning, code.into(), message.into())
    }

    pub fn push_error(&mut self, code: impl Into<String>, message: impl Into<String>) -> &mut Diagnostic {
        self.push(DiagnosticLevel::Error, code.into(), message.into())
    }

    fn push(&mut self, level: DiagnosticLevel, code: String, message: String) -> &mut Diagnostic {
        match level {
            DiagnosticLevel::Info => tracing::info!(code = %code, "{message}"),
            DiagnosticLevel::Warning => tracing::warn!(code = %code, "{message}"),
            DiagnosticLevel::Error => tracing::error!(code = %code, "{message}"),
        }
        self.items.push(Diagnostic {
            level,
            code,
            message,
            data: BTreeMap::new(),
        });
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.items
            .iter()
            .any(|d| matches!(d.level, DiagnosticLevel::Error))
    }

    pub fn warnings(&self) -> usize {
        self.items
            .iter()
            .filter(|d| matches!(d.level, DiagnosticLevel::Warning))
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Diagnostic {
    /// Attach a key/value detail to the diagnostic.
    pub fn with_data(&mut self, k: impl Into<String>, v: impl Into<String>) -> &mut Self {
        self.data.insert(k.into(), v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_in_order_with_levels() {
        let mut d = Diagnostics::new();
        d.push_info("a.info", "first");
        d.push_warning("a.warn", "second").with_data("len", "5");
        d.push_error("a.err", "third");

        let v = d.clone().into_vec();
        assert_eq!(v.len(), 3);
        assert_eq!(v[0].code, "a.info");
        assert_eq!(v[1].data.get("len").map(String::as_str), Some("5"));
        assert_eq!(d.warnings(), 1);
        assert!(d.has_errors());
    }

    #[test]
    fn empty_collector() {
        let d = Diagnostics::new();
        assert!(d.is_empty());
        assert!(!d.has_errors());
    }
}
