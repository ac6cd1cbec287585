//! Project settings consumed by the plan assembler.
//!
//! Everything the assembler needs from the host project is an explicit
//! field here; the assembler itself performs no ambient lookups. For file
//! discovery and layering, see the `loading` module.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::helpers::{
    default_assets_dir, default_assets_out, default_entries, default_environment_module,
    default_html_template, default_manifest, default_output_dir, default_resolve_extensions,
    default_sw_file, default_version_file,
};

/// Fixed paths and filenames of one front-end project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Directory all build output lands in
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template handed to the templating step
    #[serde(default = "default_html_template")]
    pub html_template: PathBuf,

    /// Web app manifest, copied and JSON-minified into the output directory
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Directory of static assets, mirrored unchanged into the output directory
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Destination of the mirrored assets tree, relative to `output_dir`
    #[serde(default = "default_assets_out")]
    pub assets_out: PathBuf,

    /// Filename the service-worker generator writes
    #[serde(default = "default_sw_file")]
    pub sw_file: String,

    /// Filename of the version stamp the service worker polls for new deploys
    #[serde(default = "default_version_file")]
    pub version_file: String,

    /// Module rewritten to its target-specific variant in non-local builds
    #[serde(default = "default_environment_module")]
    pub environment_module: String,

    /// Named entry points (insertion order is preserved in the plan)
    #[serde(default = "default_entries")]
    pub entries: IndexMap<String, PathBuf>,

    /// Extensions tried during bare-import resolution
    #[serde(default = "default_resolve_extensions")]
    pub resolve_extensions: Vec<String>,
}

impl ProjectSettings {
    /// Create from serde_json::Value (for programmatic settings from an API)
    ///
    /// # Example
    ///
    /// ```
    /// use bosun_config::ProjectSettings;
    /// use serde_json::json;
    /// use std::path::PathBuf;
    ///
    /// let value = json!({
    ///     "output_dir": "dist",
    ///     "version_file": "deploy-version.json"
    /// });
    ///
    /// let settings = ProjectSettings::from_value(value).unwrap();
    /// assert_eq!(settings.output_dir, PathBuf::from("dist"));
    /// assert_eq!(settings.version_file, "deploy-version.json");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Absolute or project-relative path of the version stamp file.
    pub fn version_file_path(&self) -> PathBuf {
        self.output_dir.join(&self.version_file)
    }
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            html_template: default_html_template(),
            manifest: default_manifest(),
            assets_dir: default_assets_dir(),
            assets_out: default_assets_out(),
            sw_file: default_sw_file(),
            version_file: default_version_file(),
            environment_module: default_environment_module(),
            entries: default_entries(),
            resolve_extensions: default_resolve_extensions(),
        }
    }
}
