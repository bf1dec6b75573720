//! Shape type definitions
//!
//! Supported field types:
//! - string: UTF-8 string
//! - any: any JSON value, never inspected
//! - record: object with string keys and uniformly typed values
//! - object: nested object with its own field schema
//! - array: homogeneous array with element type
//! - enum: string restricted to a closed set of tags

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field types a shape can declare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Any JSON value, accepted without inspection
    Any,
    /// String-keyed mapping whose values share one type
    Record {
        /// Value type (boxed to allow recursive types)
        value_type: Box<FieldType>,
    },
    /// Nested object with its own field schema
    Object {
        /// Nested field definitions
        fields: BTreeMap<String, FieldDef>,
    },
    /// Homogeneous array with single element type
    Array {
        /// Element type (boxed to allow recursive types)
        element_type: Box<FieldType>,
    },
    /// String drawn from a closed set
    Enum {
        /// Accepted tags
        values: Vec<String>,
    },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Any => "any",
            FieldType::Record { .. } => "record",
            FieldType::Object { .. } => "object",
            FieldType::Array { .. } => "array",
            FieldType::Enum { .. } => "enum",
        }
    }

    /// A `mapping string -> any`
    pub fn any_record() -> Self {
        FieldType::Record {
            value_type: Box::new(FieldType::Any),
        }
    }

    /// Enum over the given tags
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldType::Enum {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Field definition: a type plus whether the field must be present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
}

impl FieldDef {
    pub fn new(field_type: FieldType, required: bool) -> Self {
        Self {
            field_type,
            required,
        }
    }

    /// Create a required string field
    pub fn required_string() -> Self {
        Self::new(FieldType::String, true)
    }

    /// Create an optional string field
    pub fn optional_string() -> Self {
        Self::new(FieldType::String, false)
    }

    /// Create a required `mapping string -> any` field
    pub fn required_record() -> Self {
        Self::new(FieldType::any_record(), true)
    }

    /// Create an optional `mapping string -> any` field
    pub fn optional_record() -> Self {
        Self::new(FieldType::any_record(), false)
    }

    /// Create an optional object field
    pub fn optional_object(fields: BTreeMap<String, FieldDef>) -> Self {
        Self::new(FieldType::Object { fields }, false)
    }

    /// Create an optional array field
    pub fn optional_array(element_type: FieldType) -> Self {
        Self::new(
            FieldType::Array {
                element_type: Box::new(element_type),
            },
            false,
        )
    }

    /// Create an optional enum field
    pub fn optional_enum<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldType::enumeration(values), false)
    }
}

/// A named shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique shape name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Field definitions, ordered by name
    pub fields: BTreeMap<String, FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(name: impl Into<String>, fields: BTreeMap<String, FieldDef>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Names of the fields that must be present
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|(_, def)| def.required)
            .map(|(name, _)| name.as_str())
    }
}

/// Builds a field map from `(name, def)` pairs.
pub fn fields<I, S>(entries: I) -> BTreeMap<String, FieldDef>
where
    I: IntoIterator<Item = (S, FieldDef)>,
    S: Into<String>,
{
    entries
        .into_iter()
        .map(|(name, def)| (name.into(), def))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fields_listed() {
        let schema = Schema::new(
            "trigger",
            fields([
                ("triggerName", FieldDef::required_string()),
                ("config", FieldDef::required_record()),
                ("app", FieldDef::optional_string()),
            ]),
        );

        let required: Vec<_> = schema.required_fields().collect();
        assert_eq!(required, vec!["config", "triggerName"]);
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Any.type_name(), "any");
        assert_eq!(FieldType::any_record().type_name(), "record");
        assert_eq!(
            FieldType::Object {
                fields: BTreeMap::new()
            }
            .type_name(),
            "object"
        );
        assert_eq!(
            FieldType::Array {
                element_type: Box::new(FieldType::String)
            }
            .type_name(),
            "array"
        );
        assert_eq!(FieldType::enumeration(["A"]).type_name(), "enum");
    }

    #[test]
    fn test_field_def_serializes_flat() {
        let def = FieldDef::optional_array(FieldType::String);
        let value = serde_json::to_value(&def).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "array",
                "element_type": { "type": "string" },
                "required": false
            })
        );
    }

    #[test]
    fn test_schema_deserializes_from_json() {
        let schema: Schema = serde_json::from_value(json!({
            "name": "ConnectionParams",
            "fields": {
                "app": { "type": "string", "required": false },
                "connectedAccountId": { "type": "string", "required": false }
            }
        }))
        .unwrap();

        assert_eq!(schema.name, "ConnectionParams");
        assert_eq!(schema.fields.len(), 2);
        assert!(schema.description.is_none());
        assert_eq!(schema.required_fields().count(), 0);
    }
}
