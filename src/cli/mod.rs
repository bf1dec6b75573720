//! CLI module
//!
//! Provides command-line interface for:
//! - validate: check a JSON document from stdin against a named shape
//! - list: show the available shapes
//! - describe: print a shape definition

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, validate};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_json, write_response, write_validation_error};
