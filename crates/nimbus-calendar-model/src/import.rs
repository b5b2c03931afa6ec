//! Per-object import results.

use serde::{Deserialize, Serialize};

/// What happened to one imported object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportOutcome {
    /// A new object was stored.
    Created,
    /// An existing object was replaced.
    Updated,
    /// An object with the same UID exists and supersede was off.
    Exists,
    /// The object was rejected.
    Error,
}

/// Result of importing one calendar object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    /// UID of the object, empty when it could not be read.
    pub uid: String,
    /// What the backend did with it.
    pub outcome: ImportOutcome,
    /// Validation or storage messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ImportResult {
    /// A result without errors.
    #[must_use]
    pub fn new(uid: impl Into<String>, outcome: ImportOutcome) -> Self {
        Self {
            uid: uid.into(),
            outcome,
            errors: Vec::new(),
        }
    }

    /// A failed import carrying its error messages.
    #[must_use]
    pub fn failed(uid: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            uid: uid.into(),
            outcome: ImportOutcome::Error,
            errors,
        }
    }

    /// Whether the object was rejected.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.outcome == ImportOutcome::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_omit_empty_errors() {
        let json = serde_json::to_value(ImportResult::new("evt-1", ImportOutcome::Created)).unwrap();
        assert_eq!(json, serde_json::json!({"uid": "evt-1", "outcome": "created"}));
    }

    #[test]
    fn test_should_mark_failed_imports() {
        let result = ImportResult::failed("evt-2", vec!["missing DTSTART".to_owned()]);
        assert!(result.is_error());
        assert_eq!(result.errors.len(), 1);
    }
}
