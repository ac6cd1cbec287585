//! Pluggable settings validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation
//! (for library use).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;

/// Trait for pluggable settings validation strategies
pub trait SettingsValidator {
    /// Validate project settings
    fn validate(&self, settings: &ProjectSettings) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this when the project tree is virtual or not present, e.g. when a
/// plan is assembled from programmatic settings.
///
/// # Example
///
/// ```
/// use bosun_config::{ProjectSettings, SchemaValidator, SettingsValidator};
///
/// let settings = ProjectSettings::default();
/// SchemaValidator.validate(&settings).unwrap();
/// ```
pub struct SchemaValidator;

impl SettingsValidator for SchemaValidator {
    fn validate(&self, settings: &ProjectSettings) -> Result<()> {
        if settings.entries.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        if settings.version_file.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "version stamp filename cannot be empty".to_string(),
                hint: Some("set 'version_file' to a filename inside the output directory".to_string()),
            });
        }

        if settings.sw_file.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "service-worker filename cannot be empty".to_string(),
                hint: Some("set 'sw_file' to the service-worker destination filename".to_string()),
            });
        }

        if settings.version_file == settings.sw_file {
            return Err(ConfigError::SchemaValidation {
                message: "version stamp and service-worker filenames collide".to_string(),
                hint: Some("give 'version_file' and 'sw_file' distinct names".to_string()),
            });
        }

        for extension in &settings.resolve_extensions {
            if !extension.starts_with('.') {
                return Err(ConfigError::SchemaValidation {
                    message: format!("resolve extension '{extension}' must start with '.'"),
                    hint: Some("write extensions as '.ts', '.js', ...".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the template, manifest, assets directory and entry
/// files exist on disk, resolving relative paths against a project root.
///
/// # Example
///
/// ```no_run
/// use bosun_config::{FsValidator, ProjectSettings, SettingsValidator};
///
/// let settings = ProjectSettings::default();
/// FsValidator::new(".").validate(&settings).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl SettingsValidator for FsValidator {
    fn validate(&self, settings: &ProjectSettings) -> Result<()> {
        // Schema problems surface before filesystem probing
        SchemaValidator.validate(settings)?;

        let template = self.resolve(&settings.html_template);
        if !template.is_file() {
            return Err(ConfigError::TemplateNotFound(template));
        }

        let manifest = self.resolve(&settings.manifest);
        if !manifest.is_file() {
            return Err(ConfigError::ManifestNotFound(manifest));
        }

        let assets = self.resolve(&settings.assets_dir);
        if !assets.is_dir() {
            return Err(ConfigError::AssetsDirNotFound(assets));
        }

        for entry in settings.entries.values() {
            let entry = self.resolve(entry);
            if !entry.is_file() {
                return Err(ConfigError::EntryNotFound(entry));
            }
        }

        Ok(())
    }
}

/// Validate settings against the schema rules only.
pub fn validate_schema(settings: &ProjectSettings) -> Result<()> {
    SchemaValidator.validate(settings)
}

/// Validate settings against the filesystem under `root`.
pub fn validate_fs(settings: &ProjectSettings, root: impl Into<PathBuf>) -> Result<()> {
    FsValidator::new(root).validate(settings)
}
