//! Shape error types
//!
//! Error codes:
//! - PARAMS_VALIDATION_FAILED
//! - PARAMS_UNKNOWN_SCHEMA
//! - PARAMS_DUPLICATE_SCHEMA

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Shape error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Input does not match the shape
    ValidationFailed,
    /// No shape registered under the requested name
    UnknownSchema,
    /// A shape with the same name is already registered
    DuplicateSchema,
}

impl SchemaErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::ValidationFailed => "PARAMS_VALIDATION_FAILED",
            SchemaErrorCode::UnknownSchema => "PARAMS_UNKNOWN_SCHEMA",
            SchemaErrorCode::DuplicateSchema => "PARAMS_DUPLICATE_SCHEMA",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// What went wrong at a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    MissingField,
    TypeMismatch,
    InvalidEnumValue,
    UnrecognizedKey,
}

/// One mismatch between the input and the shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Field path (e.g., "config.labels[1]")
    pub path: String,
    pub kind: IssueKind,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationIssue {
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: IssueKind::MissingField,
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn type_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            kind: IssueKind::TypeMismatch,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_enum_value(path: impl Into<String>, allowed: &[String], actual: &str) -> Self {
        Self {
            path: path.into(),
            kind: IssueKind::InvalidEnumValue,
            expected: format!("one of [{}]", allowed.join(", ")),
            actual: format!("'{}'", actual),
        }
    }

    pub fn unrecognized_key(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: IssueKind::UnrecognizedKey,
            expected: "no undeclared fields".into(),
            actual: "extra field present".into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.path, self.expected, self.actual
        )
    }
}

/// Shape error with full context
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    schema: Option<String>,
    issues: Vec<ValidationIssue>,
}

impl SchemaError {
    /// Create a validation failed error from a non-empty issue list
    pub fn validation_failed(schema: impl Into<String>, issues: Vec<ValidationIssue>) -> Self {
        let name = schema.into();
        let listed = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            code: SchemaErrorCode::ValidationFailed,
            message: format!("'{}' validation failed: {}", name, listed),
            schema: Some(name),
            issues,
        }
    }

    /// Create an unknown schema error
    pub fn unknown_schema(schema: impl Into<String>) -> Self {
        let name = schema.into();
        Self {
            code: SchemaErrorCode::UnknownSchema,
            message: format!("Schema '{}' not found", name),
            schema: Some(name),
            issues: Vec::new(),
        }
    }

    /// Create a duplicate schema error
    pub fn duplicate_schema(schema: impl Into<String>) -> Self {
        let name = schema.into();
        Self {
            code: SchemaErrorCode::DuplicateSchema,
            message: format!("Schema '{}' is already registered", name),
            schema: Some(name),
            issues: Vec::new(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the schema name if applicable
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Returns every issue found, in path order
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns the issue at `path`, if any
    pub fn issue_at(&self, path: &str) -> Option<&ValidationIssue> {
        self.issues.iter().find(|issue| issue.path == path)
    }
}

/// Result type for shape operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::ValidationFailed.code(), "PARAMS_VALIDATION_FAILED");
        assert_eq!(SchemaErrorCode::UnknownSchema.code(), "PARAMS_UNKNOWN_SCHEMA");
        assert_eq!(SchemaErrorCode::DuplicateSchema.code(), "PARAMS_DUPLICATE_SCHEMA");
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::type_mismatch("config.labels[0]", "string", "int");
        let display = issue.to_string();
        assert!(display.contains("config.labels[0]"));
        assert!(display.contains("string"));
        assert!(display.contains("int"));
    }

    #[test]
    fn test_validation_failed_lists_every_issue() {
        let err = SchemaError::validation_failed(
            "TriggerSubscribeParam",
            vec![
                ValidationIssue::missing_field("config"),
                ValidationIssue::missing_field("triggerName"),
            ],
        );

        assert_eq!(err.code(), SchemaErrorCode::ValidationFailed);
        assert_eq!(err.issues().len(), 2);
        assert!(err.message().contains("config"));
        assert!(err.message().contains("triggerName"));
        assert!(err.to_string().starts_with("PARAMS_VALIDATION_FAILED"));
        assert_eq!(err.issue_at("config").unwrap().kind, IssueKind::MissingField);
    }

    #[test]
    fn test_enum_issue_lists_allowed_values() {
        let allowed = vec!["OAUTH2".to_string(), "API_KEY".to_string()];
        let issue = ValidationIssue::invalid_enum_value("authMode", &allowed, "SAML");
        assert_eq!(issue.expected, "one of [OAUTH2, API_KEY]");
        assert_eq!(issue.actual, "'SAML'");
    }
}
