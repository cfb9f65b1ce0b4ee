//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Raised by the generator when the OpenAPI document has the wrong shape, and
/// by the tool repairer when a tool cannot be fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The OpenAPI document does not have the expected nested-mapping shape.
    #[error("Malformed OpenAPI document: {0}")]
    Structural(String),

    /// A tool lacks a field that has no default.
    #[error("Tool is missing required field: {0}")]
    MissingField(String),

    /// A tool's `input_schema` is not a mapping.
    #[error("input_schema must be an object")]
    SchemaType,

    /// A tool field is present but has the wrong JSON type.
    #[error("Tool field '{field}' must be a {expected}")]
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// The tool itself is not a JSON object.
    #[error("Tool definition must be an object")]
    NotAnObject,
}

impl DomainError {
    pub(crate) fn structural(message: impl Into<String>) -> Self {
        DomainError::Structural(message.into())
    }

    /// Check if this error comes from a malformed OpenAPI document
    pub fn is_structural(&self) -> bool {
        matches!(self, DomainError::Structural(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = DomainError::MissingField("name".to_string());
        assert_eq!(error.to_string(), "Tool is missing required field: name");
    }

    #[test]
    fn test_schema_type_display() {
        assert_eq!(
            DomainError::SchemaType.to_string(),
            "input_schema must be an object"
        );
    }

    #[test]
    fn test_is_structural_check() {
        assert!(DomainError::structural("paths must be a mapping").is_structural());
        assert!(!DomainError::SchemaType.is_structural());
        assert!(!DomainError::MissingField("name".to_string()).is_structural());
    }
}
