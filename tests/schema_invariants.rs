//! Shape Invariant Tests
//!
//! Tests for the four entity shapes:
//! - Required fields alone are enough
//! - Missing required fields are reported
//! - `mapping string -> any` fields are not inspected
//! - Array elements are type-checked
//! - Validation is deterministic

use integration_params::params::{
    connection_params, execute_action_params, initiate_connection_params,
    trigger_subscribe_param,
};
use integration_params::schema::{IssueKind, Schema, SchemaErrorCode, SchemaValidator};
use integration_params::{
    ConnectionParams, ExecuteActionParams, InitiateConnectionParams, Params,
    TriggerSubscribeParam,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::thread;

// =============================================================================
// Helper Functions
// =============================================================================

fn validate(schema: &Schema, doc: Value) -> Result<Value, integration_params::SchemaError> {
    SchemaValidator::default().validate(schema, &doc)
}

fn missing_paths(schema: &Schema, doc: Value) -> Vec<String> {
    let err = validate(schema, doc).unwrap_err();
    assert_eq!(err.code(), SchemaErrorCode::ValidationFailed);
    err.issues()
        .iter()
        .filter(|issue| issue.kind == IssueKind::MissingField)
        .map(|issue| issue.path.clone())
        .collect()
}

// =============================================================================
// Required Field Tests
// =============================================================================

/// Every shape accepts exactly its required fields.
#[test]
fn test_required_fields_alone_pass() {
    assert!(validate(execute_action_params(), json!({ "actionName": "x" })).is_ok());
    assert!(validate(initiate_connection_params(), json!({})).is_ok());
    assert!(validate(connection_params(), json!({})).is_ok());
    assert!(validate(
        trigger_subscribe_param(),
        json!({ "triggerName": "t", "config": {} })
    )
    .is_ok());
}

/// Empty object fails for ExecuteActionParams.
#[test]
fn test_execute_action_requires_action_name() {
    assert_eq!(
        missing_paths(execute_action_params(), json!({})),
        vec!["actionName"]
    );
}

/// Trigger subscription needs both triggerName and config.
#[test]
fn test_trigger_subscribe_requires_name_and_config() {
    assert_eq!(
        missing_paths(trigger_subscribe_param(), json!({ "triggerName": "t" })),
        vec!["config"]
    );
    assert_eq!(
        missing_paths(trigger_subscribe_param(), json!({})),
        vec!["config", "triggerName"]
    );
}

// =============================================================================
// Field Type Tests
// =============================================================================

/// Nested config labels must be strings.
#[test]
fn test_initiate_connection_label_elements() {
    assert!(validate(
        initiate_connection_params(),
        json!({ "config": { "labels": ["a", "b"] } })
    )
    .is_ok());

    let err = validate(
        initiate_connection_params(),
        json!({ "config": { "labels": [1, 2] } }),
    )
    .unwrap_err();
    let paths: Vec<_> = err.issues().iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["config.labels[0]", "config.labels[1]"]);
}

/// Dynamic mappings accept any object and nothing else.
#[test]
fn test_any_mappings() {
    let doc = json!({
        "actionName": "x",
        "params": { "n": 1, "list": [1, "two", null], "nested": { "ok": true } }
    });
    let parsed = validate(execute_action_params(), doc.clone()).unwrap();
    assert_eq!(parsed, doc);

    for not_a_map in [json!([]), json!("s"), json!(1), json!(null)] {
        let err = validate(
            trigger_subscribe_param(),
            json!({ "triggerName": "t", "config": not_a_map }),
        )
        .unwrap_err();
        assert_eq!(err.issue_at("config").unwrap().kind, IssueKind::TypeMismatch);
    }
}

/// authMode must be one of the known tags.
#[test]
fn test_auth_mode_tag() {
    assert!(validate(initiate_connection_params(), json!({ "authMode": "API_KEY" })).is_ok());

    let err = validate(initiate_connection_params(), json!({ "authMode": "api_key" })).unwrap_err();
    assert_eq!(err.issue_at("authMode").unwrap().kind, IssueKind::InvalidEnumValue);
}

/// Optional string fields reject other types.
#[test]
fn test_optional_field_type_checked() {
    let err = validate(connection_params(), json!({ "app": 5, "connectedAccountId": false }))
        .unwrap_err();
    assert_eq!(err.issues().len(), 2);
}

// =============================================================================
// Typed Parsing Tests
// =============================================================================

#[test]
fn test_typed_parse_all_shapes() {
    let action = ExecuteActionParams::parse(&json!({ "actionName": "x", "text": "do it" })).unwrap();
    assert_eq!(action.text.as_deref(), Some("do it"));

    let connection = ConnectionParams::parse(&json!({})).unwrap();
    assert_eq!(connection, ConnectionParams::default());

    let initiate = InitiateConnectionParams::parse(&json!({
        "integrationId": "int_1",
        "connectionParams": { "subdomain": "acme" },
        "redirectUri": "https://example.com",
        "labels": ["prod"]
    }))
    .unwrap();
    assert_eq!(initiate.integration_id.as_deref(), Some("int_1"));
    assert_eq!(initiate.labels, Some(vec!["prod".to_string()]));

    let trigger = TriggerSubscribeParam::parse(&json!({
        "app": "github",
        "triggerName": "github_star_added",
        "config": { "repo": "rust" }
    }))
    .unwrap();
    assert_eq!(trigger.config["repo"], json!("rust"));
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same input, same outcome.
#[test]
fn test_validation_is_deterministic() {
    let good = json!({ "triggerName": "t", "config": { "a": 1 } });
    let bad = json!({ "triggerName": 1 });

    let first_ok = validate(trigger_subscribe_param(), good.clone()).unwrap();
    let first_err = validate(trigger_subscribe_param(), bad.clone()).unwrap_err();

    for _ in 0..100 {
        assert_eq!(validate(trigger_subscribe_param(), good.clone()).unwrap(), first_ok);
        assert_eq!(
            validate(trigger_subscribe_param(), bad.clone()).unwrap_err().issues(),
            first_err.issues()
        );
    }
}

/// Shapes and validators are shared across threads without coordination.
#[test]
fn test_concurrent_validation() {
    let validator = Arc::new(SchemaValidator::default());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let doc = json!({ "actionName": format!("action_{}", i) });
                validator.validate(execute_action_params(), &doc).is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
