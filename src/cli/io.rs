//! JSON I/O handling for CLI
//!
//! - Input: single JSON document via stdin (may span lines)
//! - Output: single JSON object per line via stdout
//! - UTF-8 only

use std::io::{Read, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::schema::SchemaError;

/// Read one JSON document from `reader`
pub fn read_request<R: Read>(reader: &mut R) -> CliResult<Value> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    if input.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    let value: Value = serde_json::from_str(&input)?;
    Ok(value)
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    write_line(out, &json!({ "status": "ok", "data": data }))
}

/// Write a validation failure, listing every issue
pub fn write_validation_error<W: Write>(out: &mut W, err: &SchemaError) -> CliResult<()> {
    write_line(
        out,
        &json!({
            "status": "error",
            "code": err.code().code(),
            "message": err.message(),
            "issues": err.issues()
        }),
    )
}

/// Write a raw JSON value
pub fn write_json<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    write_line(out, value)
}

fn write_line<W: Write>(out: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
