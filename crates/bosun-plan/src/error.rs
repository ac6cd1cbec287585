//! Error types for plan assembly.
//!
//! Stamp and output-directory failures are fatal: a build without a fresh
//! version stamp silently breaks deploy detection, so nothing here is
//! retried or recovered.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for plan assembly operations
pub type Result<T> = std::result::Result<T, PlanError>;

/// Error type for plan assembly operations
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("unknown build target '{0}' (expected one of: local, beta, production)")]
    UnknownTarget(String),

    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output path exists but is not a directory: {0}")]
    OutputPathNotDirectory(PathBuf),

    #[error("failed to write version stamp {}: {source}", .path.display())]
    StampWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_names_the_candidates() {
        let msg = PlanError::UnknownTarget("prod".to_string()).to_string();
        assert!(msg.contains("'prod'"));
        assert!(msg.contains("production"));
    }

    #[test]
    fn stamp_write_mentions_path() {
        let err = PlanError::StampWrite {
            path: PathBuf::from("build/sw-version.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("build/sw-version.json"));
    }
}
