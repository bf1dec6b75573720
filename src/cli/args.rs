//! CLI argument definitions using clap
//!
//! Commands:
//! - integration-params validate <SHAPE> [--unknown-keys <POLICY>]
//! - integration-params list
//! - integration-params describe <SHAPE>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schema::UnknownKeys;

/// Validate integration SDK parameters against their declared shapes
#[derive(Parser, Debug)]
#[command(name = "integration-params")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one JSON document read from stdin
    Validate {
        /// Shape name, e.g. ExecuteActionParams
        shape: String,

        /// Overrides the configured policy for undeclared keys
        #[arg(long, value_enum)]
        unknown_keys: Option<UnknownKeys>,
    },

    /// List the available shapes
    List,

    /// Print a shape definition as JSON
    Describe {
        /// Shape name
        shape: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_with_override() {
        let cli = Cli::try_parse_from([
            "integration-params",
            "--config",
            "params.json",
            "validate",
            "ConnectionParams",
            "--unknown-keys",
            "strict",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("params.json")));
        match cli.command {
            Command::Validate {
                shape,
                unknown_keys,
            } => {
                assert_eq!(shape, "ConnectionParams");
                assert_eq!(unknown_keys, Some(UnknownKeys::Strict));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
