//! # bosun-config
//!
//! Project settings for the Bosun deploy-plan assembler.
//!
//! This crate models the fixed filenames and source paths a front-end
//! project exposes to the plan assembler (output directory, HTML template,
//! web manifest, static assets, service-worker filenames, entry points),
//! loads them from layered sources, and validates them.

pub mod error;
pub mod loading;
pub mod settings;
pub mod validation;

mod helpers;

// Re-export main types
pub use error::{ConfigError, Result};
pub use settings::ProjectSettings;
pub use validation::{validate_fs, validate_schema, FsValidator, SchemaValidator, SettingsValidator};
