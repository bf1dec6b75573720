//! In-memory registry of named shapes

use serde_json::Value;
use std::collections::BTreeMap;

use super::errors::{SchemaError, SchemaResult};
use super::types::Schema;
use super::validator::SchemaValidator;

/// Named shapes available for lookup and validation.
///
/// Registered shapes are immutable: registering a second shape under an
/// existing name is rejected.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, Schema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a shape under its name.
    pub fn register(&mut self, schema: Schema) -> SchemaResult<()> {
        if self.schemas.contains_key(&schema.name) {
            return Err(SchemaError::duplicate_schema(&schema.name));
        }

        tracing::trace!(schema = %schema.name, fields = schema.fields.len(), "schema registered");
        self.schemas.insert(schema.name.clone(), schema);
        Ok(())
    }

    /// Gets a shape by name.
    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Gets a shape by name, failing with `PARAMS_UNKNOWN_SCHEMA`.
    pub fn require(&self, name: &str) -> SchemaResult<&Schema> {
        self.get(name).ok_or_else(|| SchemaError::unknown_schema(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validates `input` against the shape registered as `name`.
    pub fn validate(
        &self,
        name: &str,
        validator: &SchemaValidator,
        input: &Value,
    ) -> SchemaResult<Value> {
        validator.validate(self.require(name)?, input)
    }
}
