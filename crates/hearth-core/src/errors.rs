//! Cross-cutting error types for Hearth.
//!
//! Domain-specific errors (e.g., `DataError`, `AuthError`) are defined in
//! their respective crates; this module holds only the data-integrity error
//! shared by anything that parses store values into closed enumerations.

use thiserror::Error;

/// A store value fell outside a closed enumeration.
///
/// This means the remote schema and this portal have drifted, so the view
/// requesting the data must fail closed rather than render a blank or
/// defaulted badge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("data integrity violation: {field} has out-of-enumeration value '{value}'")]
pub struct IntegrityError {
    /// Dotted `entity.column` path of the offending field.
    pub field: &'static str,
    /// The value as received from the store.
    pub value: String,
}

impl IntegrityError {
    #[must_use]
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_field_and_value() {
        let err = IntegrityError::new("project.status", "cancelled");
        let msg = err.to_string();
        assert!(msg.contains("project.status"));
        assert!(msg.contains("'cancelled'"));
    }
}
