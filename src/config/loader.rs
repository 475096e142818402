//! Configuration loading from the command line and environment.
//!
//! The only override the relay accepts is the listen port, taken from
//! `--port` or the `PORT` environment variable.

use clap::Parser;
use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command-line arguments for the relay binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "mcp-relay")]
#[command(about = "Relays MCP requests to the team wellbeing API", long_about = None)]
pub struct RelayArgs {
    /// Port to listen on.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,
}

impl RelayArgs {
    /// Apply the overrides on top of the defaults and validate the result.
    pub fn into_config(self) -> Result<RelayConfig, ConfigError> {
        let mut config = RelayConfig::default();
        if let Some(port) = self.port {
            config.listener.port = port;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
