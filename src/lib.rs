//! integration-params - runtime-validated parameter shapes for an integration SDK
//!
//! Declares the accepted input for four SDK operations (executing an action,
//! initiating a connection, referencing a connection, subscribing to a
//! trigger) and validates untrusted JSON against them.

pub mod auth_mode;
pub mod cli;
pub mod config;
pub mod logging;
pub mod params;
pub mod schema;

pub use auth_mode::AuthMode;
pub use params::{
    ConnectionConfig, ConnectionParams, ExecuteActionParams, InitiateConnectionParams, Params,
    TriggerSubscribeParam,
};
pub use schema::{SchemaError, SchemaResult, SchemaValidator, UnknownKeys};
