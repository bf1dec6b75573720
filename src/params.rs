//! Parameter shapes for the SDK's entity operations
//!
//! Four shapes are declared here:
//! - `ExecuteActionParams`: run a named action
//! - `InitiateConnectionParams`: start a new external connection
//! - `ConnectionParams`: refer to an existing connection
//! - `TriggerSubscribeParam`: subscribe to a trigger
//!
//! Each shape is available as a [`Schema`] for raw validation and as a typed
//! struct implementing [`Params`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

use crate::auth_mode::AuthMode;
use crate::schema::{
    fields, FieldDef, FieldType, Schema, SchemaError, SchemaRegistry, SchemaResult,
    SchemaValidator, ValidationIssue,
};

/// Shape of `ExecuteActionParams`.
pub fn execute_action_params() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            ExecuteActionParams::SCHEMA_NAME,
            fields([
                ("actionName", FieldDef::required_string()),
                ("params", FieldDef::optional_record()),
                ("text", FieldDef::optional_string()),
                ("connectedAccountId", FieldDef::optional_string()),
            ]),
        )
        .with_description("Execute a named action")
    })
}

/// Shape of `InitiateConnectionParams`.
pub fn initiate_connection_params() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        let config = fields([
            ("labels", FieldDef::optional_array(FieldType::String)),
            ("redirectUrl", FieldDef::optional_string()),
        ]);

        Schema::new(
            InitiateConnectionParams::SCHEMA_NAME,
            fields([
                ("appName", FieldDef::optional_string()),
                ("authConfig", FieldDef::optional_record()),
                ("integrationId", FieldDef::optional_string()),
                ("authMode", FieldDef::optional_enum(AuthMode::tags())),
                ("connectionParams", FieldDef::optional_record()),
                ("config", FieldDef::optional_object(config)),
                ("redirectUri", FieldDef::optional_string()),
                ("labels", FieldDef::optional_array(FieldType::String)),
            ]),
        )
        .with_description("Initiate a connection to an external app")
    })
}

/// Shape of `ConnectionParams`.
pub fn connection_params() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            ConnectionParams::SCHEMA_NAME,
            fields([
                ("connectedAccountId", FieldDef::optional_string()),
                ("app", FieldDef::optional_string()),
            ]),
        )
        .with_description("Reference an existing connection")
    })
}

/// Shape of `TriggerSubscribeParam`.
pub fn trigger_subscribe_param() -> &'static Schema {
    static SCHEMA: OnceLock<Schema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        Schema::new(
            TriggerSubscribeParam::SCHEMA_NAME,
            fields([
                ("app", FieldDef::optional_string()),
                ("appName", FieldDef::optional_string()),
                ("triggerName", FieldDef::required_string()),
                ("config", FieldDef::required_record()),
            ]),
        )
        .with_description("Subscribe to a trigger")
    })
}

/// Registry holding the four entity shapes under their names.
pub fn builtin_registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    for schema in [
        execute_action_params(),
        initiate_connection_params(),
        connection_params(),
        trigger_subscribe_param(),
    ] {
        // Names are distinct constants.
        if let Err(e) = registry.register(schema.clone()) {
            tracing::error!(error = %e, "builtin schema rejected");
        }
    }
    registry
}

/// A typed parameter set backed by a shape.
pub trait Params: Serialize + DeserializeOwned {
    /// Name the shape is registered under
    const SCHEMA_NAME: &'static str;

    fn schema() -> &'static Schema;

    /// Validates with the default (stripping) validator and builds `Self`.
    fn parse(input: &Value) -> SchemaResult<Self> {
        Self::parse_with(&SchemaValidator::default(), input)
    }

    /// Validates with `validator` and builds `Self`.
    fn parse_with(validator: &SchemaValidator, input: &Value) -> SchemaResult<Self> {
        let parsed = validator.validate(Self::schema(), input)?;
        serde_json::from_value(parsed).map_err(|e| {
            SchemaError::validation_failed(
                Self::SCHEMA_NAME,
                vec![ValidationIssue::type_mismatch(
                    "$root",
                    Self::SCHEMA_NAME,
                    e.to_string(),
                )],
            )
        })
    }

    /// Serializes back to JSON, omitting absent fields.
    fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteActionParams {
    pub action_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_account_id: Option<String>,
}

impl ExecuteActionParams {
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            params: None,
            text: None,
            connected_account_id: None,
        }
    }
}

impl Params for ExecuteActionParams {
    const SCHEMA_NAME: &'static str = "ExecuteActionParams";

    fn schema() -> &'static Schema {
        execute_action_params()
    }
}

/// Nested `config` of [`InitiateConnectionParams`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateConnectionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_config: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_mode: Option<AuthMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_params: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ConnectionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl Params for InitiateConnectionParams {
    const SCHEMA_NAME: &'static str = "InitiateConnectionParams";

    fn schema() -> &'static Schema {
        initiate_connection_params()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

impl Params for ConnectionParams {
    const SCHEMA_NAME: &'static str = "ConnectionParams";

    fn schema() -> &'static Schema {
        connection_params()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSubscribeParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    pub trigger_name: String,
    pub config: Map<String, Value>,
}

impl TriggerSubscribeParam {
    pub fn new(trigger_name: impl Into<String>, config: Map<String, Value>) -> Self {
        Self {
            app: None,
            app_name: None,
            trigger_name: trigger_name.into(),
            config,
        }
    }
}

impl Params for TriggerSubscribeParam {
    const SCHEMA_NAME: &'static str = "TriggerSubscribeParam";

    fn schema() -> &'static Schema {
        trigger_subscribe_param()
    }
}
