//! Declarative shapes for validating untrusted JSON input
//!
//! # Design Principles
//!
//! - Shapes are data, built once and shared
//! - Required fields must be present; optional fields may be absent but never `null`
//! - Field types match exactly, without coercion
//! - Undeclared keys follow an explicit `UnknownKeys` policy
//! - Every issue is reported in one error
//! - Validation is deterministic and stateless

mod errors;
mod registry;
mod types;
mod validator;

pub use errors::{IssueKind, SchemaError, SchemaErrorCode, SchemaResult, ValidationIssue};
pub use registry::SchemaRegistry;
pub use types::{fields, FieldDef, FieldType, Schema};
pub use validator::{SchemaValidator, UnknownKeys};
