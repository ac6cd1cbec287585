//! Error handling for the Bosun CLI.
//!
//! A single top-level `CliError` wraps the domain errors from the config
//! and plan crates; conversion is automatic via `#[from]`. At the binary
//! boundary errors become miette reports so hints render nicely.

use bosun_config::ConfigError;
use bosun_plan::{BuildTarget, PlanError};
use miette::Report;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, validation)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plan assembly errors (unknown target, stamp I/O)
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to a miette Report, attaching hints where the error
/// has an obvious fix.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Plan(PlanError::UnknownTarget(target)) => {
            let known = BuildTarget::ALL
                .iter()
                .map(BuildTarget::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            miette::miette!("Unknown build target '{}'\n\nHint: expected one of: {}", target, known)
        }
        CliError::Config(ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        }) => {
            miette::miette!("Configuration error: {}\n\nHint: {}", message, hint)
        }
        CliError::InvalidArgument(msg) => miette::miette!("{}", msg),
        other => miette::miette!("{}", other),
    }
}
