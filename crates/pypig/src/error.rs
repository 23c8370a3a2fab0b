//! CLI errors and exit statuses.

use crate::config::ConfigError;
use pypig_index::IndexError;
use std::process::ExitCode;

/// Exit status for any failed command.
pub const ERROR_EXIT: u8 = 2;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("output error: {0}")]
    Output(String),

    #[error("failed to initialize logging: {0}")]
    LoggingInit(String),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(ERROR_EXIT)
    }
}

/// Result of a command that ran without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The filters matched nothing.
    NoPackages,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::NoPackages => ExitCode::from(1),
        }
    }
}
