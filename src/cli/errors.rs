//! CLI-specific error types

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::schema::{SchemaError, SchemaErrorCode};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout) or malformed JSON input
    IoError,
    /// Shape name not registered
    UnknownShape,
    /// Input rejected by its shape
    ValidationFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "PARAMS_CLI_CONFIG_ERROR",
            Self::IoError => "PARAMS_CLI_IO_ERROR",
            Self::UnknownShape => "PARAMS_CLI_UNKNOWN_SHAPE",
            Self::ValidationFailed => "PARAMS_CLI_VALIDATION_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<SchemaError> for CliError {
    fn from(e: SchemaError) -> Self {
        let code = match e.code() {
            SchemaErrorCode::ValidationFailed => CliErrorCode::ValidationFailed,
            SchemaErrorCode::UnknownSchema | SchemaErrorCode::DuplicateSchema => {
                CliErrorCode::UnknownShape
            }
        };
        Self::new(code, e.message())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
