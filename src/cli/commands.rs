//! CLI command implementations

use std::io::{self, Read, Write};

use serde_json::{json, Value};

use crate::config::Config;
use crate::logging;
use crate::params::builtin_registry;
use crate::schema::{SchemaErrorCode, SchemaRegistry, SchemaValidator, UnknownKeys};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{read_request, write_json, write_response, write_validation_error};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    logging::init(&config.log_filter);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(cli.command, &config, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a command against the built-in shapes
pub fn run_command<R: Read, W: Write>(
    cmd: Command,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let registry = builtin_registry();

    match cmd {
        Command::Validate {
            shape,
            unknown_keys,
        } => validate(&registry, &shape, unknown_keys, config, input, out),
        Command::List => list(&registry, out),
        Command::Describe { shape } => describe(&registry, &shape, out),
    }
}

/// Validate one document from `input` against `shape`.
///
/// A rejected document is reported on `out` and also returned as an error so
/// the process exits non-zero.
pub fn validate<R: Read, W: Write>(
    registry: &SchemaRegistry,
    shape: &str,
    unknown_keys: Option<UnknownKeys>,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> CliResult<()> {
    let schema = registry.require(shape)?;
    let validator = SchemaValidator::new(unknown_keys.unwrap_or(config.unknown_keys));
    let document = read_request(input)?;

    tracing::info!(
        shape,
        policy = validator.unknown_keys().as_str(),
        "validating document"
    );

    match validator.validate(schema, &document) {
        Ok(parsed) => write_response(out, parsed),
        Err(e) if e.code() == SchemaErrorCode::ValidationFailed => {
            write_validation_error(out, &e)?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

fn list<W: Write>(registry: &SchemaRegistry, out: &mut W) -> CliResult<()> {
    let shapes: Vec<Value> = registry
        .names()
        .into_iter()
        .filter_map(|name| registry.get(name))
        .map(|schema| {
            json!({
                "name": schema.name,
                "description": schema.description,
                "required": schema.required_fields().collect::<Vec<_>>()
            })
        })
        .collect();

    write_response(out, Value::Array(shapes))
}

fn describe<W: Write>(registry: &SchemaRegistry, shape: &str, out: &mut W) -> CliResult<()> {
    let schema = registry.require(shape)?;
    let definition = serde_json::to_value(schema)?;
    write_json(out, &definition)
}
