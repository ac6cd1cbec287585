//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Config parsing/loading errors
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    // Schema validation errors (no filesystem checks)
    #[error("no entry points specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("HTML template not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("web manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("assets directory not found: {0}")]
    AssetsDirNotFound(PathBuf),

    #[error("entry path not found: {0}")]
    EntryNotFound(PathBuf),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
