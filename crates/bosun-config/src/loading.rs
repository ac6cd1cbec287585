//! Layered settings loading.
//!
//! Priority: environment variables > config file > defaults. The config
//! file is `bosun.toml` or `bosun.config.json` in the working directory
//! unless an explicit path is given.

use figment::{
    providers::{Env, Format as _, Json, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::settings::ProjectSettings;

/// Environment variable prefix, e.g. `BOSUN_OUTPUT_DIR=dist`.
const ENV_PREFIX: &str = "BOSUN_";

/// Config filenames probed in order when no explicit path is given.
const CONFIG_CANDIDATES: [&str; 2] = ["bosun.toml", "bosun.config.json"];

impl ProjectSettings {
    /// Load settings from layered sources.
    ///
    /// An explicit `config_path` must exist; the default candidates are
    /// optional and skipped silently when absent.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Some(path.to_path_buf())
            }
            None => CONFIG_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists()),
        };

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading settings file");
            figment = merge_file(figment, &path)?;
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        figment
            .extract()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
