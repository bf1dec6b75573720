//! Shape validator
//!
//! Validation semantics:
//! - All required fields are present
//! - Present fields match their declared type exactly
//! - `null` is never a stand-in for an absent optional field
//! - Undeclared fields follow the configured `UnknownKeys` policy
//! - Every issue is reported, not only the first one
//!
//! Validation never mutates its input and keeps no state between calls.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::errors::{SchemaError, SchemaResult, ValidationIssue};
use super::types::{FieldDef, FieldType, Schema};

/// What to do with object keys a shape does not declare
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeys {
    /// Accept and drop them from the parsed value
    #[default]
    Strip,
    /// Accept and keep them in the parsed value
    Passthrough,
    /// Reject them
    Strict,
}

impl UnknownKeys {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownKeys::Strip => "strip",
            UnknownKeys::Passthrough => "passthrough",
            UnknownKeys::Strict => "strict",
        }
    }
}

/// Validator that checks JSON values against shapes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator {
    unknown_keys: UnknownKeys,
}

impl SchemaValidator {
    /// Creates a validator with the given unknown-key policy.
    pub fn new(unknown_keys: UnknownKeys) -> Self {
        Self { unknown_keys }
    }

    pub fn unknown_keys(&self) -> UnknownKeys {
        self.unknown_keys
    }

    /// Validates `input` against `schema`, returning the parsed value.
    ///
    /// # Errors
    ///
    /// Returns `PARAMS_VALIDATION_FAILED` carrying every issue found when the
    /// input is not an object, a required field is missing, a field has the
    /// wrong type, or (under `Strict`) an undeclared key is present.
    pub fn validate(&self, schema: &Schema, input: &Value) -> SchemaResult<Value> {
        let mut issues = Vec::new();

        let parsed = match input.as_object() {
            Some(obj) => Value::Object(self.check_object(obj, &schema.fields, "", &mut issues)),
            None => {
                issues.push(ValidationIssue::type_mismatch(
                    "$root",
                    "object",
                    json_type_name(input),
                ));
                Value::Null
            }
        };

        if issues.is_empty() {
            tracing::debug!(schema = %schema.name, policy = self.unknown_keys.as_str(), "params accepted");
            Ok(parsed)
        } else {
            tracing::debug!(
                schema = %schema.name,
                issues = issues.len(),
                "params rejected"
            );
            Err(SchemaError::validation_failed(&schema.name, issues))
        }
    }

    /// Checks an object against field definitions and builds its parsed form.
    fn check_object(
        &self,
        obj: &Map<String, Value>,
        fields: &BTreeMap<String, FieldDef>,
        path_prefix: &str,
        issues: &mut Vec<ValidationIssue>,
    ) -> Map<String, Value> {
        let mut parsed = Map::new();

        for (field_name, field_def) in fields {
            let field_path = make_path(path_prefix, field_name);

            match obj.get(field_name) {
                Some(value) => {
                    if let Some(checked) =
                        self.check_value(value, &field_def.field_type, &field_path, issues)
                    {
                        parsed.insert(field_name.clone(), checked);
                    }
                }
                None => {
                    if field_def.required {
                        issues.push(ValidationIssue::missing_field(field_path));
                    }
                }
            }
        }

        for (key, value) in obj {
            if fields.contains_key(key) {
                continue;
            }
            match self.unknown_keys {
                UnknownKeys::Strip => {}
                UnknownKeys::Passthrough => {
                    parsed.insert(key.clone(), value.clone());
                }
                UnknownKeys::Strict => {
                    issues.push(ValidationIssue::unrecognized_key(make_path(path_prefix, key)));
                }
            }
        }

        parsed
    }

    /// Checks a value against a field type. Returns `None` after recording an issue.
    fn check_value(
        &self,
        value: &Value,
        expected_type: &FieldType,
        field_path: &str,
        issues: &mut Vec<ValidationIssue>,
    ) -> Option<Value> {
        match expected_type {
            FieldType::String => {
                if !value.is_string() {
                    issues.push(type_error(field_path, "string", value));
                    return None;
                }
                Some(value.clone())
            }
            FieldType::Any => Some(value.clone()),
            FieldType::Record { value_type } => {
                let Some(obj) = value.as_object() else {
                    issues.push(type_error(field_path, "record", value));
                    return None;
                };

                let before = issues.len();
                let mut parsed = Map::new();
                for (key, entry) in obj {
                    let entry_path = make_path(field_path, key);
                    if let Some(checked) = self.check_value(entry, value_type, &entry_path, issues) {
                        parsed.insert(key.clone(), checked);
                    }
                }
                (issues.len() == before).then_some(Value::Object(parsed))
            }
            FieldType::Object { fields } => {
                let Some(obj) = value.as_object() else {
                    issues.push(type_error(field_path, "object", value));
                    return None;
                };

                let before = issues.len();
                let parsed = self.check_object(obj, fields, field_path, issues);
                (issues.len() == before).then_some(Value::Object(parsed))
            }
            FieldType::Array { element_type } => {
                let Some(arr) = value.as_array() else {
                    issues.push(type_error(field_path, "array", value));
                    return None;
                };

                let before = issues.len();
                let parsed: Vec<Value> = arr
                    .iter()
                    .enumerate()
                    .filter_map(|(i, elem)| {
                        let elem_path = format!("{}[{}]", field_path, i);
                        self.check_value(elem, element_type, &elem_path, issues)
                    })
                    .collect();
                (issues.len() == before).then_some(Value::Array(parsed))
            }
            FieldType::Enum { values } => {
                let Some(tag) = value.as_str() else {
                    issues.push(type_error(field_path, "string", value));
                    return None;
                };

                if !values.iter().any(|allowed| allowed == tag) {
                    issues.push(ValidationIssue::invalid_enum_value(field_path, values, tag));
                    return None;
                }
                Some(value.clone())
            }
        }
    }
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int"
            } else {
                "float"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn type_error(field_path: &str, expected: &str, actual: &Value) -> ValidationIssue {
    ValidationIssue::type_mismatch(field_path, expected, json_type_name(actual))
}
